use terrapath_core::{Grid, Position};

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::error::PathError;
use crate::frontier::best_first;
use crate::traits::{PathStrategy, Search};

/// Lower bound on the cost still to pay from `p` to `goal`.
///
/// Every step enters a cell costing at least `grid.min_cost()`, and reaching
/// the goal takes at least `manhattan(p, goal)` steps, so this never
/// overestimates (admissible) and drops by at most one cell cost per step
/// (consistent).
#[inline]
pub fn heuristic(grid: &Grid, p: Position, goal: Position) -> u64 {
    u64::from(grid.min_cost()) * p.manhattan(goal) as u64
}

/// A*-style search: uniform-cost search ordered by cost plus [`heuristic`].
///
/// Returns routes of the same minimum cost as
/// [`UniformCost`](crate::UniformCost), usually after finalizing fewer cells.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    max_iterations: usize,
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl Heuristic {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl PathStrategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError> {
        // min_cost is fixed when the grid is built.
        best_first(self.name(), grid, start, goal, self.max_iterations, |p| {
            heuristic(grid, p, goal)
        })
    }
}
