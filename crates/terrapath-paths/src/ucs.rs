use terrapath_core::{Grid, Position};

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::error::PathError;
use crate::frontier::best_first;
use crate::traits::{PathStrategy, Search};

/// Uniform-cost search: always grows the cheapest partial path.
///
/// Returns a route of minimum total cell cost, ties broken by fewer cells.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost {
    max_iterations: usize,
}

impl Default for UniformCost {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl UniformCost {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl PathStrategy for UniformCost {
    fn name(&self) -> &'static str {
        "uniform-cost"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError> {
        best_first(self.name(), grid, start, goal, self.max_iterations, |_| 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::TerrainKind;

    #[test]
    fn uniform_road_grid() {
        let g = Grid::filled(3, 3, TerrainKind::Road).unwrap();
        let path = UniformCost::default()
            .find_path(&g, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.total_cost(), 10);
    }

    #[test]
    fn detours_around_stone() {
        let g = Grid::parse("rsr\nrsr\nrrr").unwrap();
        let path = UniformCost::default()
            .find_path(&g, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.total_cost(), 14);
        assert!(path.cells().iter().all(|c| c.kind == TerrainKind::Road));
    }

    #[test]
    fn cheaper_longer_route_wins() {
        // Straight across costs 2 + 7 + 2 = 11; round the road costs 10.
        let g = Grid::parse("rdr\nrrr").unwrap();
        let path = UniformCost::default()
            .find_path(&g, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert_eq!(path.total_cost(), 10);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn equal_cost_prefers_fewer_cells() {
        // Across the dune and round the bottom both cost 11.
        let g = Grid::parse("rdr\nrgr").unwrap();
        let path = UniformCost::default()
            .find_path(&g, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert_eq!(path.total_cost(), 11);
        assert_eq!(path.len(), 3);
        assert_eq!(path.cells()[1].kind, TerrainKind::Dune);
    }

    #[test]
    fn iteration_cap_is_unreachable() {
        let g = Grid::filled(4, 4, TerrainKind::Road).unwrap();
        let err = UniformCost::new(1)
            .find_path(&g, Position::new(0, 0), Position::new(3, 3))
            .unwrap_err();
        assert!(matches!(err, PathError::Unreachable { iterations: 1, .. }));
    }
}
