//! Grid construction errors.

use thiserror::Error;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows with no cells.
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A map character that names no terrain kind.
    #[error("unknown terrain \u{201c}{ch}\u{201d} at ({row}, {col})")]
    UnknownTerrain { ch: char, row: usize, col: usize },
}
