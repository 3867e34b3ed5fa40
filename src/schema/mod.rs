//! Structured kernel definitions.
//!
//! Where [`crate::kernel`] fills a fixed LaTeX template, this module works
//! from a full [`KernelSpec`] describing every block:
//!
//! ```text
//! KernelSpec (code or YAML)
//!   ↓  validate()        → ValidationReport (errors, warnings, invariants)
//!   ↓  compile_spec()    → kernel DSL text
//! ```

pub mod blocks;
pub mod invariants;
pub mod render;
pub mod spec;
pub mod traits;
pub mod validator;

// Re-exports
pub use blocks::{block_definition, block_order, BlockDefinition, BlockType, BLOCKS};
pub use invariants::{check_all_invariants, is_well_formed, InvariantResult};
pub use render::{compile_spec, render, CompileOptions};
pub use spec::{
    BoundaryParams, DecoderParams, InitParams, KernelSpec, Precedence, SolverParams, TensorParams,
};
pub use traits::{validate_trait_profile, TraitProfile, VectorDefinition, TRAIT_VECTORS};
pub use validator::{validate, ValidationIssue, ValidationReport};
