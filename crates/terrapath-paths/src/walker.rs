use terrapath_core::{Grid, Position};

use crate::error::PathError;
use crate::path::Path;
use crate::traits::{PathStrategy, Search, check_endpoints, found};

/// Baseline strategy: walk the row gap, then the column gap, ignoring cost.
///
/// Always succeeds on a valid grid, with `manhattan(start, goal) + 1` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker;

impl PathStrategy for Walker {
    fn name(&self) -> &'static str {
        "walker"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError> {
        check_endpoints(grid, start, goal)?;

        let mut positions = Vec::with_capacity(start.manhattan(goal) + 1);
        positions.push(start);
        let mut p = start;
        while let Some(next) = p.step_toward(goal) {
            positions.push(next);
            p = next;
        }

        let steps = positions.len() - 1;
        Ok(found(self.name(), Path::from_positions(grid, &positions), steps))
    }
}
