//! YAML kernel configuration.
//!
//! ```yaml
//! mode: Counter
//! rigor: 0.8
//! weights:
//!   Innovation: 0.25
//!   NonDual: 0.2
//! template_dir: ./kernels
//! ```
//!
//! Weight overrides are applied after the basis is built, so an `Integrity`
//! override replaces the rigor-scaled value.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::compiler::CtnKernel;
use super::error::KernelError;
use super::mode::CtnMode;
use super::template::{DirTemplates, EmbeddedTemplates, TemplateLoader};

fn default_rigor() -> f64 {
    1.0
}

/// Declarative kernel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub mode: CtnMode,
    #[serde(default = "default_rigor")]
    pub rigor: f64,
    /// Per-vector weight overrides, keyed by vector name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, f64>,
    /// Directory searched first for `templates/kernel.tex`; the bundled copy
    /// is used when it has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            mode: CtnMode::default(),
            rigor: default_rigor(),
            weights: BTreeMap::new(),
            template_dir: None,
        }
    }
}

impl KernelConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, KernelError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, KernelError> {
        let path = path.as_ref();
        log::debug!("Loading kernel config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, KernelError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the configured kernel.
    pub fn build(&self) -> Result<CtnKernel, KernelError> {
        let mut kernel = CtnKernel::new(self.mode, self.rigor);
        for (name, weight) in &self.weights {
            kernel.set_weight(name, *weight)?;
        }

        if let Some(dir) = &self.template_dir {
            let loader =
                TemplateLoader::new(DirTemplates::new(dir)).with_fallback(EmbeddedTemplates);
            kernel = kernel.with_loader(loader);
        }

        Ok(kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = KernelConfig::from_yaml("{}").unwrap();
        assert_eq!(config, KernelConfig::default());
        assert_eq!(config.build().unwrap(), CtnKernel::default());
    }

    #[test]
    fn test_build_applies_overrides() {
        let yaml = r#"
mode: Counter
rigor: 0.5
weights:
  Innovation: 0.25
  NonDual: 0.2
"#;
        let kernel = KernelConfig::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(kernel.mode(), CtnMode::Counter);
        assert_eq!(kernel.weights(), vec![0.1, 0.15, 0.1, 0.1, 0.2, 0.25]);
    }

    #[test]
    fn test_integrity_override_replaces_scaled_value() {
        let yaml = "rigor: 0.0\nweights:\n  Integrity: 0.9\n";
        let kernel = KernelConfig::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(kernel.rigor(), 0.0);
        assert_eq!(kernel.vector("Integrity").unwrap().weight, 0.9);
    }

    #[test]
    fn test_unknown_weight_name_fails() {
        let yaml = "weights:\n  GhostVector: 0.5\n";
        let err = KernelConfig::from_yaml(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, KernelError::VectorNotFound(ref n) if n == "GhostVector"));
    }

    #[test]
    fn test_invalid_mode_in_yaml() {
        let err = KernelConfig::from_yaml("mode: Chaos\n").unwrap_err();
        assert!(matches!(err, KernelError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernel.yaml");
        std::fs::write(&path, "mode: Dominance\nrigor: 2.0\n").unwrap();

        let kernel = KernelConfig::from_yaml_file(&path).unwrap().build().unwrap();
        assert_eq!(kernel.mode(), CtnMode::Dominance);
        assert_eq!(kernel.rigor(), 1.0);
    }

    #[test]
    fn test_from_missing_file() {
        let err = KernelConfig::from_yaml_file("/nonexistent/kernel.yaml").unwrap_err();
        assert!(matches!(err, KernelError::Io(_)));
    }

    #[test]
    fn test_template_dir_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("templates")).unwrap();
        std::fs::write(
            dir.path().join("templates/kernel.tex"),
            "CUSTOM __WEIGHTS__\n",
        )
        .unwrap();

        let config = KernelConfig {
            template_dir: Some(dir.path().to_path_buf()),
            ..KernelConfig::default()
        };
        let output = config.build().unwrap().compile().unwrap();
        assert_eq!(output, "CUSTOM 0.10, 0.30, 0.10, 0.10, 0.30, 0.10");
    }

    #[test]
    fn test_empty_template_dir_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let config = KernelConfig {
            template_dir: Some(dir.path().to_path_buf()),
            ..KernelConfig::default()
        };
        let output = config.build().unwrap().compile().unwrap();
        assert!(output.contains("SYS_KERNEL_INIT"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = KernelConfig::default();
        config.mode = CtnMode::Counter;
        config.weights.insert("Epistemic".to_string(), 0.6);
        let back = KernelConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
