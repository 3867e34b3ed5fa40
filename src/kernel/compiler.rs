//! The CTN kernel compiler.
//!
//! A [`CtnKernel`] holds a solver mode, a rigor scalar, and the six-vector
//! cognitive basis. [`CtnKernel::compile`] injects that state into the
//! kernel template:
//!
//! ```text
//! __WEIGHTS__       ← "0.10, 0.30, 0.10, 0.10, 0.30, 0.10"
//! __VECTORS__       ← one \vec{v}_{i} line per basis vector
//! __SOLVER_LOGIC__  ← the mode's solver-logic snippet
//! ```

use serde::{Deserialize, Serialize};

use super::error::KernelError;
use super::mode::CtnMode;
use super::template::TemplateLoader;
use super::vector::{standard_basis, CognitiveVector};

const WEIGHTS_PLACEHOLDER: &str = "__WEIGHTS__";
const VECTORS_PLACEHOLDER: &str = "__VECTORS__";
const SOLVER_LOGIC_PLACEHOLDER: &str = "__SOLVER_LOGIC__";

/// Clamp rigor into `[0, 1]`. NaN counts as full rigor.
fn clamp_rigor(rigor: f64) -> f64 {
    if rigor.is_nan() {
        1.0
    } else {
        rigor.clamp(0.0, 1.0)
    }
}

/// Compiler for Cognitive Tensor Network kernels.
#[derive(Debug, Clone)]
pub struct CtnKernel {
    mode: CtnMode,
    rigor: f64,
    vectors: Vec<CognitiveVector>,
    loader: TemplateLoader,
}

impl CtnKernel {
    /// Create a kernel. Out-of-range rigor is clamped, not rejected.
    pub fn new(mode: CtnMode, rigor: f64) -> Self {
        let rigor = clamp_rigor(rigor);
        Self {
            mode,
            rigor,
            vectors: standard_basis(rigor),
            loader: TemplateLoader::default(),
        }
    }

    /// Create a kernel from a mode tag such as `"Counter"`.
    pub fn with_mode_str(mode: &str, rigor: f64) -> Result<Self, KernelError> {
        Ok(Self::new(mode.parse()?, rigor))
    }

    /// Replace the template loader used by [`compile`](Self::compile).
    pub fn with_loader(mut self, loader: TemplateLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn mode(&self) -> CtnMode {
        self.mode
    }

    /// Rigor after clamping.
    pub fn rigor(&self) -> f64 {
        self.rigor
    }

    /// The basis vectors in order.
    pub fn vectors(&self) -> &[CognitiveVector] {
        &self.vectors
    }

    /// Look up a basis vector by name.
    pub fn vector(&self, name: &str) -> Option<&CognitiveVector> {
        self.vectors.iter().find(|v| v.name == name)
    }

    /// Set the weight of the named vector. Any value is accepted.
    pub fn set_weight(&mut self, name: &str, weight: f64) -> Result<(), KernelError> {
        match self.vectors.iter_mut().find(|v| v.name == name) {
            Some(vector) => {
                vector.weight = weight;
                Ok(())
            }
            None => Err(KernelError::VectorNotFound(name.to_string())),
        }
    }

    /// Current weights in basis order.
    pub fn weights(&self) -> Vec<f64> {
        self.vectors.iter().map(|v| v.weight).collect()
    }

    /// Read the kernel template through the configured loader.
    pub fn load_template(&self) -> Result<String, KernelError> {
        self.loader.load_kernel()
    }

    /// `\vec{v}_{i}` definition lines, newline separated.
    fn vector_definitions(&self) -> String {
        self.vectors
            .iter()
            .enumerate()
            .map(|(i, v)| v.definition_line(i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Weights to two decimals, comma separated.
    fn weight_config(&self) -> String {
        self.vectors
            .iter()
            .map(|v| format!("{:.2}", v.weight))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the kernel by injecting the current state into the template.
    pub fn compile(&self) -> Result<String, KernelError> {
        let template = self.load_template()?;
        log::debug!(
            "Compiling CTN kernel: mode={}, rigor={}, weights={:?}",
            self.mode,
            self.rigor,
            self.weights()
        );

        let rendered = template
            .replace(WEIGHTS_PLACEHOLDER, &self.weight_config())
            .replace(VECTORS_PLACEHOLDER, &self.vector_definitions())
            .replace(SOLVER_LOGIC_PLACEHOLDER, self.mode.solver_logic());

        Ok(rendered.trim().to_string())
    }

    /// Snapshot of the full kernel state.
    pub fn to_dict(&self) -> KernelSnapshot {
        KernelSnapshot {
            mode: self.mode,
            rigor: self.rigor,
            vectors: self.vectors.clone(),
        }
    }

    /// Rebuild a kernel from a snapshot, restoring every vector weight.
    pub fn from_snapshot(snapshot: &KernelSnapshot) -> Result<Self, KernelError> {
        let mut kernel = Self::new(snapshot.mode, snapshot.rigor);
        for vector in &snapshot.vectors {
            kernel.set_weight(&vector.name, vector.weight)?;
        }
        Ok(kernel)
    }
}

impl Default for CtnKernel {
    fn default() -> Self {
        Self::new(CtnMode::Analysis, 1.0)
    }
}

/// Kernels are equal when their mode, rigor, and basis are; the loader is
/// not compared.
impl PartialEq for CtnKernel {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.rigor == other.rigor && self.vectors == other.vectors
    }
}

/// Serializable kernel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSnapshot {
    pub mode: CtnMode,
    pub rigor: f64,
    pub vectors: Vec<CognitiveVector>,
}

impl KernelSnapshot {
    pub fn to_json(&self) -> Result<String, KernelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, KernelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml(&self) -> Result<String, KernelError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, KernelError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::template::{InlineTemplate, TemplateSource};

    #[derive(Debug)]
    struct NoTemplates;

    impl TemplateSource for NoTemplates {
        fn read(&self, _name: &str) -> Result<Option<String>, KernelError> {
            Ok(None)
        }
    }

    fn integrity(kernel: &CtnKernel) -> f64 {
        kernel.vector("Integrity").unwrap().weight
    }

    fn inline(kernel: CtnKernel, text: &str) -> CtnKernel {
        kernel.with_loader(TemplateLoader::new(InlineTemplate::new(text)))
    }

    #[test]
    fn test_initialization_defaults() {
        let kernel = CtnKernel::default();
        assert_eq!(kernel.mode(), CtnMode::Analysis);
        assert_eq!(kernel.rigor(), 1.0);
        assert_eq!(integrity(&kernel), 0.3);
        assert_eq!(kernel.weights(), vec![0.1, 0.3, 0.1, 0.1, 0.3, 0.1]);
    }

    #[test]
    fn test_rigor_scaling() {
        let kernel = CtnKernel::new(CtnMode::Analysis, 0.5);
        assert_eq!(integrity(&kernel), 0.15);
    }

    #[test]
    fn test_rigor_clamped() {
        let high = CtnKernel::new(CtnMode::Analysis, 1.5);
        assert_eq!(high.rigor(), 1.0);
        assert_eq!(integrity(&high), 0.3);

        let low = CtnKernel::new(CtnMode::Analysis, -1.0);
        assert_eq!(low.rigor(), 0.0);
        assert_eq!(integrity(&low), 0.0);

        let nan = CtnKernel::new(CtnMode::Analysis, f64::NAN);
        assert_eq!(nan.rigor(), 1.0);
    }

    #[test]
    fn test_mode_logic_mapping() {
        for (mode, marker) in [
            (CtnMode::Analysis, r"\mathsf{Deconstruct}(\Phi)"),
            (CtnMode::Counter, r"\mathsf{Inject}(\eta_{\perp})"),
            (CtnMode::Dominance, r"\mathsf{Verify} \circ \mathsf{Dictate}"),
        ] {
            let kernel = inline(CtnKernel::new(mode, 1.0), "__SOLVER_LOGIC__");
            assert!(kernel.compile().unwrap().contains(marker));
        }
    }

    #[test]
    fn test_set_weight_success() {
        let mut kernel = CtnKernel::default();
        kernel.set_weight("Innovation", 0.99).unwrap();
        assert_eq!(kernel.weights(), vec![0.1, 0.3, 0.1, 0.1, 0.3, 0.99]);
    }

    #[test]
    fn test_set_weight_accepts_any_value() {
        let mut kernel = CtnKernel::default();
        kernel.set_weight("Epistemic", -4.0).unwrap();
        kernel.set_weight("NonDual", 12.5).unwrap();
        assert_eq!(kernel.weights()[0], -4.0);
        assert_eq!(kernel.weights()[4], 12.5);
    }

    #[test]
    fn test_set_weight_failure() {
        let mut kernel = CtnKernel::default();
        let before = kernel.clone();
        let err = kernel.set_weight("GhostVector", 0.5).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("GhostVector"));
        assert_eq!(kernel, before);
        assert_eq!(kernel.vectors().len(), 6);
    }

    #[test]
    fn test_compile_integrity() {
        let kernel = inline(
            CtnKernel::default(),
            "Kernel: __WEIGHTS__ | Logic: __SOLVER_LOGIC__",
        );
        let output = kernel.compile().unwrap();
        assert!(output.contains("0.30"));
        assert!(output.contains(r"\mathsf{Deconstruct}"));
        assert_eq!(
            output,
            r"Kernel: 0.10, 0.30, 0.10, 0.10, 0.30, 0.10 | Logic: \text{Mode: } \mathsf{Analysis} \implies \mathsf{Deconstruct}(\Phi)"
        );
    }

    #[test]
    fn test_compile_vectors_block() {
        let kernel = inline(CtnKernel::default(), "  \n__VECTORS__\n\n");
        let output = kernel.compile().unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            r"\vec{v}_{1} = \{ \epsilon_{hid} \to 0^{+}, \text{Atomic derivation} \}"
        );
        assert_eq!(
            lines[5],
            r"\vec{v}_{6} = \{ \mathbb{U} \setminus \mathcal{S}, \text{Unbound search} \}"
        );
    }

    #[test]
    fn test_compile_replaces_every_occurrence() {
        let kernel = inline(CtnKernel::new(CtnMode::Counter, 0.5), "__WEIGHTS__ / __WEIGHTS__");
        assert_eq!(
            kernel.compile().unwrap(),
            "0.10, 0.15, 0.10, 0.10, 0.30, 0.10 / 0.10, 0.15, 0.10, 0.10, 0.30, 0.10"
        );
    }

    #[test]
    fn test_compile_leaves_text_without_placeholders() {
        let kernel = inline(CtnKernel::default(), "  plain text  ");
        assert_eq!(kernel.compile().unwrap(), "plain text");
    }

    #[test]
    fn test_compile_bundled_template() {
        let output = CtnKernel::new(CtnMode::Dominance, 1.0).compile().unwrap();
        assert!(output.contains("SYS_KERNEL_INIT"));
        assert!(output.contains("0.10, 0.30, 0.10, 0.10, 0.30, 0.10"));
        assert!(output.contains(r"\vec{v}_{6}"));
        assert!(output.contains(r"\mathsf{Verify} \circ \mathsf{Dictate}"));
        assert!(!output.contains("__WEIGHTS__"));
        assert!(!output.contains("__VECTORS__"));
        assert!(!output.contains("__SOLVER_LOGIC__"));
        assert_eq!(output, output.trim());
    }

    #[test]
    fn test_compile_without_template() {
        let kernel = CtnKernel::default().with_loader(TemplateLoader::new(NoTemplates));
        let err = kernel.compile().unwrap_err();
        assert!(matches!(err, KernelError::TemplateMissing(_)));
        assert_eq!(err.to_string(), "CTN template missing: templates/kernel.tex");
        assert!(kernel.load_template().is_err());
    }

    #[test]
    fn test_enum_string_compatibility() {
        let from_str = CtnKernel::with_mode_str("Counter", 0.7).unwrap();
        let from_enum = CtnKernel::new(CtnMode::Counter, 0.7);
        assert_eq!(from_str.mode(), CtnMode::Counter);
        assert_eq!(from_str, from_enum);
    }

    #[test]
    fn test_invalid_mode_string() {
        let err = CtnKernel::with_mode_str("Chaos", 1.0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidMode(_)));
    }

    #[test]
    fn test_to_dict_roundtrip() {
        let mut kernel = CtnKernel::new(CtnMode::Dominance, 0.4);
        kernel.set_weight("Architecture", 0.77).unwrap();

        let snapshot = kernel.to_dict();
        assert_eq!(snapshot.mode, CtnMode::Dominance);
        assert_eq!(snapshot.rigor, 0.4);
        assert_eq!(snapshot.vectors.len(), 6);
        assert_eq!(snapshot.vectors[3].constraint, "Global invariance");

        let rebuilt = CtnKernel::from_snapshot(&snapshot).unwrap();
        assert_eq!(rebuilt.weights(), kernel.weights());
        assert_eq!(rebuilt, kernel);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = CtnKernel::default().to_dict().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "Analysis");
        assert_eq!(value["rigor"], 1.0);
        assert_eq!(value["vectors"][1]["name"], "Integrity");
        assert_eq!(value["vectors"][1]["weight"], 0.3);

        let back = KernelSnapshot::from_json(&json).unwrap();
        assert_eq!(back, CtnKernel::default().to_dict());
    }

    #[test]
    fn test_snapshot_yaml_roundtrip() {
        let mut kernel = CtnKernel::new(CtnMode::Counter, 0.2);
        kernel.set_weight("Interface", 0.45).unwrap();
        let yaml = kernel.to_dict().to_yaml().unwrap();
        let back = KernelSnapshot::from_yaml(&yaml).unwrap();
        assert_eq!(CtnKernel::from_snapshot(&back).unwrap().weights(), kernel.weights());
    }

    #[test]
    fn test_from_snapshot_unknown_vector() {
        let mut snapshot = CtnKernel::default().to_dict();
        snapshot.vectors[0].name = "Phantom".to_string();
        let err = CtnKernel::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, KernelError::VectorNotFound(ref n) if n == "Phantom"));
    }
}
