//! Kernel block registry: seven required blocks in fixed order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kernel::KernelError;

/// A top-level block of a structured kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    CtnKernelSchema,
    SysKernelInit,
    CognitiveTensors,
    StrategicSolver,
    BoundaryControl,
    DecoderManifold,
    SelfErase,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CtnKernelSchema => "CTN_KERNEL_SCHEMA",
            Self::SysKernelInit => "SYS_KERNEL_INIT",
            Self::CognitiveTensors => "COGNITIVE_TENSORS",
            Self::StrategicSolver => "STRATEGIC_SOLVER",
            Self::BoundaryControl => "BOUNDARY_CONTROL",
            Self::DecoderManifold => "DECODER_MANIFOLD",
            Self::SelfErase => "SELF_ERASE",
        }
    }

    /// Registry entry for this block.
    pub fn definition(&self) -> &'static BlockDefinition {
        block_definition(*self)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BLOCKS
            .iter()
            .map(|b| b.block_type)
            .find(|t| t.as_str() == s)
            .ok_or_else(|| KernelError::UnknownBlock(s.to_string()))
    }
}

/// Static description of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockDefinition {
    pub block_type: BlockType,
    /// Symbol the block is parameterised by (empty for `SELF_ERASE`).
    pub symbol: &'static str,
    pub required: bool,
    /// Position within the kernel, starting at 0.
    pub order: usize,
    pub description: &'static str,
}

/// All blocks, in kernel order.
pub static BLOCKS: [BlockDefinition; 7] = [
    BlockDefinition {
        block_type: BlockType::CtnKernelSchema,
        symbol: "Σ_CTN",
        required: true,
        order: 0,
        description: "Schema container declaration",
    },
    BlockDefinition {
        block_type: BlockType::SysKernelInit,
        symbol: "Ψ_global",
        required: true,
        order: 1,
        description: "Global preconditions and auth",
    },
    BlockDefinition {
        block_type: BlockType::CognitiveTensors,
        symbol: "U",
        required: true,
        order: 2,
        description: "Cognitive basis vectors",
    },
    BlockDefinition {
        block_type: BlockType::StrategicSolver,
        symbol: "Ω",
        required: true,
        order: 3,
        description: "Reasoning optimization target",
    },
    BlockDefinition {
        block_type: BlockType::BoundaryControl,
        symbol: "ζ",
        required: true,
        order: 4,
        description: "Syntax firewall (ζ-invariant)",
    },
    BlockDefinition {
        block_type: BlockType::DecoderManifold,
        symbol: "D",
        required: true,
        order: 5,
        description: "Output projection constraints",
    },
    BlockDefinition {
        block_type: BlockType::SelfErase,
        symbol: "",
        required: true,
        order: 6,
        description: "Kernel hygiene directive",
    },
];

static BLOCK_ORDER: [BlockType; 7] = [
    BlockType::CtnKernelSchema,
    BlockType::SysKernelInit,
    BlockType::CognitiveTensors,
    BlockType::StrategicSolver,
    BlockType::BoundaryControl,
    BlockType::DecoderManifold,
    BlockType::SelfErase,
];

/// Block types in kernel order.
pub fn block_order() -> &'static [BlockType] {
    &BLOCK_ORDER
}

/// Registry entry for `block_type`.
pub fn block_definition(block_type: BlockType) -> &'static BlockDefinition {
    // BLOCKS is indexed by declaration order of BlockType.
    &BLOCKS[block_type as usize]
}

/// Header line naming a block with its symbol, e.g. `BOUNDARY_CONTROL(ζ)`.
pub fn block_header(block_type: BlockType) -> String {
    let def = block_definition(block_type);
    if def.symbol.is_empty() {
        def.block_type.to_string()
    } else {
        format!("{}({})", def.block_type, def.symbol)
    }
}
