//! The three invariants of a well-formed kernel.

use serde::Serialize;

use super::spec::KernelSpec;

pub const EPISTEMIC_ANCHOR: &str = "ϑ-Invariant";
pub const SYNTAX_FIREWALL: &str = "ζ-Invariant";
pub const NULL_ASSUMPTION: &str = "σ-Invariant";

/// Outcome of a single invariant check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantResult {
    pub valid: bool,
    pub invariant: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InvariantResult {
    fn pass(invariant: &'static str) -> Self {
        Self {
            valid: true,
            invariant,
            message: None,
        }
    }

    fn fail(invariant: &'static str, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            invariant,
            message: Some(message.into()),
        }
    }
}

/// Truth (ϑ) must be the primary precedence.
pub fn check_epistemic_anchor(kernel: &KernelSpec) -> InvariantResult {
    let primary = &kernel.init.precedence.primary;
    if primary != "ϑ" {
        return InvariantResult::fail(
            EPISTEMIC_ANCHOR,
            format!("Truth (ϑ) must be primary in precedence, found: {}", primary),
        );
    }
    InvariantResult::pass(EPISTEMIC_ANCHOR)
}

/// The boundary must enforce `Leak(ℓ, Σ_CTN) = 0`.
pub fn check_syntax_firewall(kernel: &KernelSpec) -> InvariantResult {
    let enforcement = &kernel.boundary.enforcement;
    if !enforcement.contains("Leak") || !enforcement.contains('0') {
        return InvariantResult::fail(
            SYNTAX_FIREWALL,
            "Boundary must enforce Leak(ℓ, Σ_CTN) = 0",
        );
    }
    InvariantResult::pass(SYNTAX_FIREWALL)
}

/// The solver must say what happens for non-satisfiable states.
pub fn check_null_assumption(kernel: &KernelSpec) -> InvariantResult {
    if kernel.solver.null_check.trim().is_empty() {
        return InvariantResult::fail(
            NULL_ASSUMPTION,
            "Solver must define null-assumption handling",
        );
    }
    InvariantResult::pass(NULL_ASSUMPTION)
}

pub fn check_all_invariants(kernel: &KernelSpec) -> Vec<InvariantResult> {
    vec![
        check_epistemic_anchor(kernel),
        check_syntax_firewall(kernel),
        check_null_assumption(kernel),
    ]
}

/// True when all three invariants hold.
pub fn is_well_formed(kernel: &KernelSpec) -> bool {
    check_all_invariants(kernel).iter().all(|r| r.valid)
}
