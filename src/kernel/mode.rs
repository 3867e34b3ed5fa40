//! Solver modes (the strategic triad).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::KernelError;

/// Operational mode of the strategic solver.
///
/// Serializes as its tag (`"Analysis"`, `"Counter"`, `"Dominance"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CtnMode {
    /// Passive optimization: deconstruct the problem frame.
    Analysis,
    /// Active probing: inject an orthogonal perturbation before solving.
    Counter,
    /// Maximum structural control: verify, then dictate.
    Dominance,
}

impl CtnMode {
    /// All modes in declaration order.
    pub const ALL: [CtnMode; 3] = [CtnMode::Analysis, CtnMode::Counter, CtnMode::Dominance];

    /// The exact string tag of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analysis => "Analysis",
            Self::Counter => "Counter",
            Self::Dominance => "Dominance",
        }
    }

    /// LaTeX solver-logic snippet substituted for `__SOLVER_LOGIC__`.
    pub fn solver_logic(&self) -> &'static str {
        match self {
            Self::Analysis => {
                r"\text{Mode: } \mathsf{Analysis} \implies \mathsf{Deconstruct}(\Phi)"
            }
            Self::Counter => {
                r"\text{Mode: } \mathsf{Counter} \implies \mathsf{Inject}(\eta_{\perp})"
            }
            Self::Dominance => {
                r"\text{Mode: } \mathsf{Dominance} \implies \mathsf{Verify} \circ \mathsf{Dictate}"
            }
        }
    }
}

impl Default for CtnMode {
    fn default() -> Self {
        CtnMode::Analysis
    }
}

impl fmt::Display for CtnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtnMode {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| KernelError::InvalidMode(s.to_string()))
    }
}

impl TryFrom<&str> for CtnMode {
    type Error = KernelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
