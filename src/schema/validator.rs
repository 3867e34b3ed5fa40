//! Structural validation of kernel definitions.

use serde::Serialize;

use super::invariants::{check_all_invariants, InvariantResult};
use super::spec::KernelSpec;
use super::traits::validate_trait_profile;

/// Leak penalties below this draw a warning.
pub const MIN_LEAK_PENALTY: f64 = 1000.0;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: String,
    pub message: String,
    /// Dotted path of the offending field, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    fn at(code: &str, message: &str, path: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            path: Some(path.to_string()),
        }
    }
}

/// Full validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub invariants: Vec<InvariantResult>,
}

/// `true` when λ₄ is not +∞ and below [`MIN_LEAK_PENALTY`].
pub(crate) fn weak_leak_penalty(lambda4: f64) -> bool {
    lambda4 != f64::INFINITY && lambda4 < MIN_LEAK_PENALTY
}

/// Validate structure and invariants of `kernel`.
pub fn validate(kernel: &KernelSpec) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if kernel.schema.is_empty() {
        errors.push(ValidationIssue::at("E001", "Missing schema declaration", "schema"));
    }

    if !validate_trait_profile(&kernel.tensors.profile) {
        errors.push(ValidationIssue::at(
            "E002",
            "Invalid trait profile: all values must be in [0, 1]",
            "tensors.profile",
        ));
    }

    if weak_leak_penalty(kernel.decoder.lambda4) {
        warnings.push(ValidationIssue::at(
            "W001",
            "λ₄ (leak penalty) should be very large or Infinity for proper syntax firewall",
            "decoder.lambda4",
        ));
    }

    if kernel.boundary.internal_set.is_empty() {
        errors.push(ValidationIssue::at(
            "E003",
            "Internal symbol set (ℬ_int) cannot be empty",
            "boundary.internal_set",
        ));
    }

    let invariants = check_all_invariants(kernel);
    for inv in &invariants {
        if let (false, Some(message)) = (inv.valid, &inv.message) {
            errors.push(ValidationIssue {
                code: format!("INV_{}", inv.invariant),
                message: message.clone(),
                path: None,
            });
        }
    }

    if !errors.is_empty() {
        log::debug!("Kernel validation failed with {} error(s)", errors.len());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        invariants,
    }
}
