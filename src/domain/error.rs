use thiserror::Error;

use super::{Dimensions, Position};

/// Errors raised by the evolution core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid was requested with a non-positive size.
    #[error("cannot construct a grid of size {0}")]
    Dimension(Dimensions),

    /// A coordinate fell outside the grid.
    #[error("coordinate ({row}, {column}) is outside the grid")]
    OutOfRange { row: i64, column: i64 },

    /// A cell ended up in a state its rule forbids. Indicates a logic defect.
    #[error("invariant violation at {position}: {reason}")]
    InvariantViolation {
        position: Position,
        reason: &'static str,
    },

    #[error("unknown rule {0:?}")]
    UnknownRule(String),

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
