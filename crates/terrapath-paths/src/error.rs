use terrapath_core::{Dims, GridError, Position};
use thiserror::Error;

/// Why a route could not be planned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The grid could not be built (empty or not rectangular).
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
    /// The start or goal lies outside the grid.
    #[error("position {position} is outside the {dims} grid")]
    OutOfBounds { position: Position, dims: Dims },
    /// The search ran out of candidates, or hit its iteration cap, before
    /// reaching the goal.
    #[error("no route from {start} to {goal} after {iterations} iterations")]
    Unreachable {
        start: Position,
        goal: Position,
        iterations: usize,
    },
}
