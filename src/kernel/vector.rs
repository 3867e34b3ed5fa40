//! Cognitive basis vectors.
//!
//! The basis is closed: six vectors with fixed names, in a fixed order
//! (`v_1` through `v_6`). Only their weights change after construction.

use serde::{Deserialize, Serialize};

/// Base weight of the Integrity vector before rigor scaling.
pub const BASE_INTEGRITY: f64 = 0.3;

/// Canonical vector names in basis order.
pub const VECTOR_NAMES: [&str; 6] = [
    "Epistemic",
    "Integrity",
    "Interface",
    "Architecture",
    "NonDual",
    "Innovation",
];

/// A single dimension of the cognitive basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveVector {
    /// Fixed name, unique within the basis.
    pub name: String,
    /// LaTeX limit expression.
    pub definition: String,
    /// Plain-text constraint label.
    pub constraint: String,
    /// Current bias of this vector.
    pub weight: f64,
}

impl CognitiveVector {
    fn new(name: &str, definition: &str, constraint: &str, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
            constraint: constraint.to_string(),
            weight,
        }
    }

    /// Render as a LaTeX definition line for position `index` (1-based).
    pub fn definition_line(&self, index: usize) -> String {
        format!(
            "\\vec{{v}}_{{{}}} = \\{{ {}, \\text{{{}}} \\}}",
            index, self.definition, self.constraint
        )
    }
}

/// Build the standard basis. `rigor` must already be clamped.
pub fn standard_basis(rigor: f64) -> Vec<CognitiveVector> {
    vec![
        CognitiveVector::new("Epistemic", r"\epsilon_{hid} \to 0^{+}", "Atomic derivation", 0.1),
        CognitiveVector::new(
            "Integrity",
            r"\kappa(f) \to \min",
            "Error intolerance",
            BASE_INTEGRITY * rigor,
        ),
        CognitiveVector::new(
            "Interface",
            r"\Phi:\mathcal{W}\to\mathcal{I}",
            "Context separation",
            0.1,
        ),
        CognitiveVector::new("Architecture", r"\pi_{gl} \gg \pi_{loc}", "Global invariance", 0.1),
        CognitiveVector::new("NonDual", r"\partial A \equiv A", "Orthogonal detachment", 0.3),
        CognitiveVector::new(
            "Innovation",
            r"\mathbb{U} \setminus \mathcal{S}",
            "Unbound search",
            0.1,
        ),
    ]
}
