//! # CTN Kernel
//!
//! Compiler for Cognitive Tensor Network (CTN) kernels.
//!
//! A kernel is a weighted six-vector cognitive basis plus a solver mode,
//! rendered into a static LaTeX template ([`kernel`]). Fully specified
//! kernels, with every block spelled out, are validated and rendered by
//! [`schema`].

pub mod kernel;
pub mod schema;

pub use kernel::{CognitiveVector, CtnKernel, CtnMode, KernelConfig, KernelError, KernelSnapshot};
pub use schema::{compile_spec, validate, KernelSpec};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
