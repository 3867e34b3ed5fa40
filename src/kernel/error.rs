//! Kernel errors.

use thiserror::Error;

/// Errors that can occur while configuring, loading, or compiling a kernel.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Mode string did not match one of the solver modes.
    #[error("Invalid mode: '{0}' (expected Analysis, Counter or Dominance)")]
    InvalidMode(String),

    /// No cognitive vector with this name exists in the basis.
    #[error("Vector '{0}' not found in basis definition.")]
    VectorNotFound(String),

    /// Neither the bundled resource nor the fallback path yielded the template.
    #[error("CTN template missing: {0}")]
    TemplateMissing(String),

    /// Block type name is not one of the kernel blocks.
    #[error("Unknown block type: {0}")]
    UnknownBlock(String),

    /// Structured kernel definition failed validation.
    #[error("Invalid kernel definition: {}", .0.join("; "))]
    InvalidSpec(Vec<String>),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
