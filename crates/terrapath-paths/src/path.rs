use std::fmt;

use terrapath_core::{Cell, Grid, Position};

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A planned route: the ordered cells from start to goal, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Resolve `positions` against `grid`. Every position must be in bounds.
    pub(crate) fn from_positions(grid: &Grid, positions: &[Position]) -> Self {
        let cells: Vec<Cell> = positions.iter().filter_map(|&p| grid.cell(p)).collect();
        debug_assert_eq!(cells.len(), positions.len());
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|c| c.pos)
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().map(|c| c.pos)
    }

    pub fn goal(&self) -> Option<Position> {
        self.cells.last().map(|c| c.pos)
    }

    /// Sum of every cell's cost, the start cell included.
    pub fn total_cost(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.cost())).sum()
    }

    /// Whether every consecutive pair of cells is orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].pos.is_adjacent(w[1].pos))
    }

    /// Whether no cell appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.cells.len());
        self.cells.iter().all(|c| seen.insert(c.pos))
    }

    /// The position following `current` on the path.
    ///
    /// Returns `None` if `current` is the goal or not on the path.
    pub fn step_after(&self, current: Position) -> Option<Position> {
        let i = self.cells.iter().position(|c| c.pos == current)?;
        self.cells.get(i + 1).map(|c| c.pos)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", cell.pos)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PartialPath
// ---------------------------------------------------------------------------

/// A candidate route still being grown by a frontier search.
///
/// Never empty: it always holds at least the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPath {
    positions: Vec<Position>,
    accumulated_cost: u64,
}

impl PartialPath {
    /// A one-cell path at `start` costing `cost`.
    pub fn new(start: Position, cost: u32) -> Self {
        Self {
            positions: vec![start],
            accumulated_cost: u64::from(cost),
        }
    }

    /// A child path one step longer, ending at `next`.
    pub fn extend(&self, next: Position, cost: u32) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(next);
        Self {
            positions,
            accumulated_cost: self.accumulated_cost + u64::from(cost),
        }
    }

    /// Sum of the cell costs along the path, start included.
    #[inline]
    pub fn accumulated_cost(&self) -> u64 {
        self.accumulated_cost
    }

    /// Number of cells.
    #[inline]
    pub fn length(&self) -> usize {
        self.positions.len()
    }

    /// The last cell reached.
    #[inline]
    pub fn last(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn contains(&self, p: Position) -> bool {
        self.positions.contains(&p)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_path(self, grid: &Grid) -> Path {
        Path::from_positions(grid, &self.positions)
    }
}
