//! Nine-axis trait basis for structured kernels.
//!
//! A [`TraitProfile`] weights each axis; the cognitive state is
//! `C_net = Σ(τᵢ * vᵢ)`.

use serde::Serialize;

/// One axis of the trait basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VectorDefinition {
    /// 1-based axis id.
    pub id: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub limit_expression: &'static str,
    pub description: &'static str,
}

/// Weights for each of the nine axes, each expected in `[0, 1]`.
pub type TraitProfile = [f64; 9];

pub const TRAIT_VECTORS: [VectorDefinition; 9] = [
    VectorDefinition {
        id: 1,
        symbol: "ε",
        name: "Atomic_Derivation",
        limit_expression: "ε_hid → 0⁺",
        description: "Prefer primitive, local derivations",
    },
    VectorDefinition {
        id: 2,
        symbol: "κ",
        name: "Assertion_Rigor",
        limit_expression: "κ(f) → min",
        description: "Minimize curvature, maximize rigor",
    },
    VectorDefinition {
        id: 3,
        symbol: "Φ",
        name: "Frame_Isolation",
        limit_expression: "Φ: W → I",
        description: "Separate world-model from instructions",
    },
    VectorDefinition {
        id: 4,
        symbol: "π",
        name: "Global_Invariance",
        limit_expression: "π_gl ≫ π_loc",
        description: "Respect global constraints over local",
    },
    VectorDefinition {
        id: 5,
        symbol: "∂",
        name: "Orthogonal_Detachment",
        limit_expression: "∂A ≡ A",
        description: "Non-personal stance, no self-narrative",
    },
    VectorDefinition {
        id: 6,
        symbol: "U",
        name: "Unbound_Search",
        limit_expression: r"U \ S",
        description: "Allow exploration within constraints",
    },
    VectorDefinition {
        id: 7,
        symbol: "ζ",
        name: "Syntactic_Minimalism",
        limit_expression: "Allowed/Forbidden",
        description: "Restrict output syntax",
    },
    VectorDefinition {
        id: 8,
        symbol: "ρ",
        name: "Anti_Sycophancy",
        limit_expression: "Sycophancy → 0",
        description: "No flattery, maximum density",
    },
    VectorDefinition {
        id: 9,
        symbol: "σ",
        name: "Satisfiability_Guard",
        limit_expression: "P(z|q) < γ ⇒ Reject",
        description: "Reject unsatisfiable premises",
    },
];

/// True when every weight lies in `[0, 1]`. NaN is rejected.
pub fn validate_trait_profile(profile: &TraitProfile) -> bool {
    profile.iter().all(|v| (0.0..=1.0).contains(v))
}
