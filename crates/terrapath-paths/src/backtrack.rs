use std::cmp::Reverse;

use terrapath_core::{Grid, Position};

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::error::PathError;
use crate::marks::CellSet;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::traits::{PathStrategy, Search, check_endpoints, found, unreachable};

/// Depth-first search with backtracking, trying the cheapest neighbour first.
///
/// The stack holds `(position, depth)` entries next to an explicit current
/// path. Popping an entry at depth `d` cuts the current path back to `d`
/// cells before appending the entry, so a cell can be revisited once it has
/// been backtracked out. Cheap, but the result is not cost-optimal.
#[derive(Debug, Clone, Copy)]
pub struct Backtracking {
    max_iterations: usize,
}

impl Default for Backtracking {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl Backtracking {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

impl PathStrategy for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError> {
        check_endpoints(grid, start, goal)?;

        let mut stack: Vec<(Position, usize)> = vec![(start, 0)];
        let mut current: Vec<Position> = Vec::new();
        let mut on_path = CellSet::new(grid.dims());
        let mut nb = Neighbors::new();
        let mut iterations = 0;

        while let Some((p, depth)) = stack.pop() {
            if iterations == self.max_iterations {
                return Err(unreachable(self.name(), start, goal, iterations, true));
            }
            iterations += 1;

            // Backtrack to the entry's parent.
            while current.len() > depth {
                if let Some(q) = current.pop() {
                    on_path.remove(q);
                }
            }
            current.push(p);
            on_path.insert(p);

            if p == goal {
                let path = Path::from_positions(grid, &current);
                return Ok(found(self.name(), path, iterations));
            }

            let mut next = nb.orthogonal(grid, p, |q| on_path.contains(q)).to_vec();
            // Pushed most expensive first and equal costs in W, S, E, N
            // order, so pops come out cheapest first, then N, E, S, W.
            next.reverse();
            next.sort_by_key(|&q| Reverse(grid.cost(q)));
            log::trace!("backtracking: expand {p} at depth {depth}, {} children", next.len());
            stack.extend(next.into_iter().map(|q| (q, depth + 1)));
        }

        Err(unreachable(self.name(), start, goal, iterations, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::TerrainKind;

    #[test]
    fn follows_cheapest_neighbor() {
        // The road ring is cheaper than the mud on the direct route.
        let g = Grid::parse("rmm\nrmm\nrrr").unwrap();
        let path = Backtracking::default()
            .find_path(&g, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        let ps: Vec<Position> = path.positions().collect();
        assert_eq!(
            ps,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        // The cheap road to the west is a dead end; the search has to back
        // out of it and head east through the mud.
        let g = Grid::parse("rgmm").unwrap();
        let search = Backtracking::default()
            .search(&g, Position::new(0, 1), Position::new(0, 3))
            .unwrap();
        let ps: Vec<Position> = search.path.positions().collect();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
        );
        assert_eq!(search.iterations, 4);
    }

    #[test]
    fn cuts_several_levels_at_once() {
        // Three road cells west of the start lead nowhere. Once (0, 0) is
        // exhausted, the next entry on the stack is east of the start at
        // depth 1, so the current path drops from four cells to one.
        let g = Grid::parse("rrrgmm").unwrap();
        let search = Backtracking::default()
            .search(&g, Position::new(0, 3), Position::new(0, 5))
            .unwrap();
        let ps: Vec<Position> = search.path.positions().collect();
        assert_eq!(
            ps,
            vec![Position::new(0, 3), Position::new(0, 4), Position::new(0, 5)]
        );
        // (0, 3), (0, 2), (0, 1), (0, 0), (0, 4), (0, 5).
        assert_eq!(search.iterations, 6);
        assert_eq!(search.path.total_cost(), 13);
    }

    #[test]
    fn equal_costs_follow_neighbor_order() {
        // East comes before south.
        let g = Grid::filled(2, 2, TerrainKind::Road).unwrap();
        let path = Backtracking::default()
            .find_path(&g, Position::new(0, 0), Position::new(1, 1))
            .unwrap();
        let ps: Vec<Position> = path.positions().collect();
        assert_eq!(
            ps,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::filled(1, 1, TerrainKind::Dune).unwrap();
        let p = Position::new(0, 0);
        let path = Backtracking::default().find_path(&g, p, p).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_cost(), 7);
    }

    #[test]
    fn iteration_cap_is_unreachable() {
        let g = Grid::filled(10, 10, TerrainKind::Grass).unwrap();
        let err = Backtracking::new(3)
            .find_path(&g, Position::new(0, 0), Position::new(9, 9))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                start: Position::new(0, 0),
                goal: Position::new(9, 9),
                iterations: 3,
            }
        );
    }

    #[test]
    fn out_of_bounds_start() {
        let g = Grid::filled(2, 2, TerrainKind::Road).unwrap();
        assert!(matches!(
            Backtracking::default().find_path(&g, Position::new(0, 9), Position::new(0, 0)),
            Err(PathError::OutOfBounds { .. })
        ));
    }
}
