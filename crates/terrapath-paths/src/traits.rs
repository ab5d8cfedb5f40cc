use terrapath_core::{Grid, Position};

use crate::error::PathError;
use crate::path::Path;

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub path: Path,
    /// Frontier entries removed before the goal was reached.
    pub iterations: usize,
}

/// A route planning strategy.
///
/// Implementations own no per-call state; each call builds and drops its own
/// frontier, so a strategy can be shared freely.
pub trait PathStrategy: Send + Sync {
    /// Short, stable identifier (matches [`StrategyKind`](crate::StrategyKind)).
    fn name(&self) -> &'static str;

    /// Plan a route from `start` to `goal`, reporting search statistics.
    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError>;

    /// Plan a route from `start` to `goal`.
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Result<Path, PathError> {
        self.search(grid, start, goal).map(|s| s.path)
    }
}

/// Reject endpoints that fall outside `grid`.
pub(crate) fn check_endpoints(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<(), PathError> {
    for position in [start, goal] {
        if !grid.contains(position) {
            return Err(PathError::OutOfBounds {
                position,
                dims: grid.dims(),
            });
        }
    }
    Ok(())
}

/// Log and build the error for an exhausted or capped search.
pub(crate) fn unreachable(
    strategy: &str,
    start: Position,
    goal: Position,
    iterations: usize,
    capped: bool,
) -> PathError {
    if capped {
        log::warn!("{strategy}: iteration cap of {iterations} reached before {goal}");
    } else {
        log::debug!("{strategy}: frontier exhausted after {iterations} iterations");
    }
    PathError::Unreachable {
        start,
        goal,
        iterations,
    }
}

/// Log a completed search and wrap it.
pub(crate) fn found(strategy: &str, path: Path, iterations: usize) -> Search {
    log::debug!(
        "{strategy}: {} cells, cost {}, {iterations} iterations",
        path.len(),
        path.total_cost()
    );
    Search { path, iterations }
}
