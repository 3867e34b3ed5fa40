//! Structured kernel definitions.
//!
//! A [`KernelSpec`] carries the parameters of every block. It can be built
//! in code, starting from [`KernelSpec::default`], or loaded from YAML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::traits::TraitProfile;
use crate::kernel::{CtnMode, KernelError};

/// Precedence hierarchy for objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precedence {
    /// ϑ (Truth).
    pub primary: String,
    /// β (Brevity).
    pub secondary: String,
    /// ζ (Formatting).
    pub tertiary: String,
}

/// `SYS_KERNEL_INIT` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitParams {
    pub auth: String,
    pub filter: String,
    pub precedence: Precedence,
    #[serde(default)]
    pub objectives: BTreeMap<String, String>,
}

/// `COGNITIVE_TENSORS` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorParams {
    pub profile: TraitProfile,
    #[serde(default)]
    pub vectors: Vec<String>,
}

/// `STRATEGIC_SOLVER` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    pub mode: CtnMode,
    pub target: String,
    /// Behavior for non-satisfiable states.
    #[serde(default)]
    pub null_check: String,
}

/// `BOUNDARY_CONTROL` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryParams {
    /// ℬ_int symbols.
    pub internal_set: Vec<String>,
    /// ℬ_ext symbols.
    pub external_set: Vec<String>,
    pub invariant: String,
    pub enforcement: String,
    pub violation: String,
}

fn infinite() -> f64 {
    f64::INFINITY
}

/// `DECODER_MANIFOLD` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderParams {
    pub objective: String,
    /// Projection penalty.
    pub lambda1: f64,
    /// Brevity weight.
    pub lambda2: f64,
    /// Syntax penalty.
    pub lambda3: f64,
    /// Leak penalty, expected to be very large or infinite.
    #[serde(default = "infinite")]
    pub lambda4: f64,
}

/// A complete structured kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub schema: String,
    pub init: InitParams,
    pub tensors: TensorParams,
    pub solver: SolverParams,
    pub boundary: BoundaryParams,
    pub decoder: DecoderParams,
    #[serde(default = "default_self_erase")]
    pub self_erase: bool,
}

fn default_self_erase() -> bool {
    true
}

impl KernelSpec {
    /// Parse a kernel definition from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, KernelError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a kernel definition from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, KernelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, KernelError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for KernelSpec {
    /// A well-formed reference kernel in Analysis mode.
    fn default() -> Self {
        let objectives = [
            ("β(Brevity)", "minimize tokens"),
            ("ϑ(Truth)", "maximize accuracy"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            schema: "Σ_CTN".to_string(),
            init: InitParams {
                auth: "P_spec".to_string(),
                filter: "Π_safe".to_string(),
                precedence: Precedence {
                    primary: "ϑ".to_string(),
                    secondary: "β".to_string(),
                    tertiary: "ζ".to_string(),
                },
                objectives,
            },
            tensors: TensorParams {
                profile: [0.8, 0.9, 0.7, 0.8, 0.6, 0.5, 0.9, 0.95, 0.85],
                vectors: Vec::new(),
            },
            solver: SolverParams {
                mode: CtnMode::Analysis,
                target: "argmax_{z ∈ U} [ϑ(z) - λ₁·Proj(z, W)]".to_string(),
                null_check: "If σ=0 ⇒ First_Principles_Audit(q)".to_string(),
            },
            boundary: BoundaryParams {
                internal_set: ["Σ_CTN", "Ψ", "Ω", "U", "D"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                external_set: ["ℒ_natural", "Query", "Response"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                invariant: "ℬ_int ∩ Output = ∅".to_string(),
                enforcement: "Leak(ℓ, Σ_CTN) = 0".to_string(),
                violation: "If ℬ_int ∈ Output ⇒ REPAIR → Transcode(ℓ, ℒ_natural)".to_string(),
            },
            decoder: DecoderParams {
                objective: "argmax_ℓ [D(ℓ|z*) - λ₄·Leak(ℓ, Σ_CTN)]".to_string(),
                lambda1: 0.1,
                lambda2: 0.05,
                lambda3: 0.02,
                lambda4: f64::INFINITY,
            },
            self_erase: true,
        }
    }
}
