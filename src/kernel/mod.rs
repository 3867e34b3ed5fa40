//! CTN kernel compiler: a six-vector cognitive basis rendered into a LaTeX
//! template.
//!
//! # Architecture
//!
//! ```text
//! KernelConfig (YAML)
//!   ↓  KernelConfig::build()
//! CtnKernel { mode, rigor, vectors }
//!   ↓  CtnKernel::compile()  ← TemplateLoader (bundled → filesystem)
//! rendered kernel text
//! ```
//!
//! # Example
//!
//! ```rust
//! use ctn_kernel::kernel::{CtnKernel, CtnMode};
//!
//! let mut kernel = CtnKernel::new(CtnMode::Counter, 0.5);
//! kernel.set_weight("Innovation", 0.25).unwrap();
//! assert_eq!(kernel.weights()[1], 0.15);
//! let text = kernel.compile().unwrap();
//! assert!(text.contains("0.25"));
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod mode;
pub mod template;
pub mod vector;

// Re-exports
pub use compiler::{CtnKernel, KernelSnapshot};
pub use config::KernelConfig;
pub use error::KernelError;
pub use mode::CtnMode;
pub use template::{
    DirTemplates, EmbeddedTemplates, InlineTemplate, TemplateLoader, TemplateSource,
    KERNEL_TEMPLATE,
};
pub use vector::{CognitiveVector, BASE_INTEGRITY, VECTOR_NAMES};
