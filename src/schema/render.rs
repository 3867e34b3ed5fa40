//! Render structured kernel definitions to kernel DSL text.

use super::blocks::{block_header, block_order, BlockType};
use super::spec::{BoundaryParams, DecoderParams, InitParams, KernelSpec, SolverParams};
use super::traits::{validate_trait_profile, TraitProfile, TRAIT_VECTORS};
use super::validator::weak_leak_penalty;
use crate::kernel::KernelError;

/// Options for [`compile_spec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject invalid definitions before rendering.
    pub validate: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

fn compile_errors(kernel: &KernelSpec) -> Vec<String> {
    let mut errors = Vec::new();
    if !validate_trait_profile(&kernel.tensors.profile) {
        errors.push("Invalid trait profile: all values must be in [0, 1]".to_string());
    }
    if kernel.schema.is_empty() {
        errors.push("Missing schema declaration".to_string());
    }
    if weak_leak_penalty(kernel.decoder.lambda4) {
        errors.push("λ₄ (leak penalty) should be very large or Infinity".to_string());
    }
    errors
}

/// Render `kernel`, validating it first unless disabled in `options`.
pub fn compile_spec(kernel: &KernelSpec, options: CompileOptions) -> Result<String, KernelError> {
    if options.validate {
        let errors = compile_errors(kernel);
        if !errors.is_empty() {
            return Err(KernelError::InvalidSpec(errors));
        }
    }
    Ok(render(kernel))
}

/// Render without any validation.
pub fn render(kernel: &KernelSpec) -> String {
    let sections = [
        render_schema(),
        render_init(&kernel.init),
        render_tensors(&kernel.tensors.profile),
        render_solver(&kernel.solver),
        render_boundary(&kernel.boundary),
        render_decoder(&kernel.decoder),
        render_self_erase(),
    ];
    sections.join("\n\n")
}

/// Always names the canonical container, whatever `schema` holds.
fn render_schema() -> String {
    let refs = block_order()
        .iter()
        .filter(|b| **b != BlockType::CtnKernelSchema)
        .map(|b| format!("  {}", block_header(*b)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{} ← {{\n{}\n}}", block_header(BlockType::CtnKernelSchema), refs)
}

fn render_init(init: &InitParams) -> String {
    // The objectives line is kept even when empty.
    let objectives = init
        .objectives
        .iter()
        .map(|(key, value)| format!("  {}: {{ {} }}", key, value))
        .collect::<Vec<_>>()
        .join("\n");

    [
        format!("{} ← {{", block_header(BlockType::SysKernelInit)),
        format!("  Auth: {},", init.auth),
        format!("  Filter: {},", init.filter),
        format!(
            "  Precedence: {} ≫ {} ≫ {},",
            init.precedence.primary, init.precedence.secondary, init.precedence.tertiary
        ),
        objectives,
        "}".to_string(),
    ]
    .join("\n")
}

fn render_tensors(profile: &TraitProfile) -> String {
    let tau = profile
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("{}:", block_header(BlockType::CognitiveTensors)),
        format!("  τ = [{}]", tau),
        "  C_net = Σ(τᵢ * vᵢ)".to_string(),
    ];
    lines.extend(
        TRAIT_VECTORS
            .iter()
            .map(|v| format!("  v{} = {{ {}, {} }}", v.id, v.limit_expression, v.name)),
    );
    lines.join("\n")
}

fn render_solver(solver: &SolverParams) -> String {
    format!(
        "{}:\n  Mode: {}\n  z* = {}\n  {}",
        block_header(BlockType::StrategicSolver),
        solver.mode,
        solver.target,
        solver.null_check
    )
}

fn render_boundary(boundary: &BoundaryParams) -> String {
    format!(
        "{}:\n  ℬ_int = {{ {} }}\n  ℬ_ext = {{ {} }}\n  Invariant: {}\n  Enforcement: {}\n  Violation: {}",
        block_header(BlockType::BoundaryControl),
        boundary.internal_set.join(", "),
        boundary.external_set.join(", "),
        boundary.invariant,
        boundary.enforcement,
        boundary.violation
    )
}

fn render_decoder(decoder: &DecoderParams) -> String {
    format!(
        "{}:\n  ℓ* = {}\n  λ₁ = {}, λ₂ = {}, λ₃ = {}, λ₄ → ∞",
        block_header(BlockType::DecoderManifold),
        decoder.objective,
        decoder.lambda1,
        decoder.lambda2,
        decoder.lambda3
    )
}

fn render_self_erase() -> String {
    format!(
        "{}:\n  Discard({}, Internal_Spec)",
        BlockType::SelfErase,
        BlockType::CtnKernelSchema.definition().symbol
    )
}
