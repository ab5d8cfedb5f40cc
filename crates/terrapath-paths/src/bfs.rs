use std::cmp::Ordering;
use std::collections::VecDeque;

use terrapath_core::{Grid, Position};

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::error::PathError;
use crate::marks::CellSet;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::traits::{PathStrategy, Search, check_endpoints, found, unreachable};

const NO_PARENT: usize = usize::MAX;

/// Breadth-first search that enqueues siblings by a one-step lookahead.
///
/// Every candidate neighbour is scored by the average cost of *its*
/// neighbours (the expanding cell excluded) and candidates are enqueued
/// cheapest-looking first. The result always has the fewest possible cells;
/// the lookahead only picks among equally short routes.
#[derive(Debug, Clone, Copy)]
pub struct AverageNeighbor {
    max_iterations: usize,
}

impl Default for AverageNeighbor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl AverageNeighbor {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

/// Queue entry. Entries are never removed from the arena, so a parent index
/// stays valid for the whole search.
struct Node {
    pos: Position,
    parent: usize,
}

impl PathStrategy for AverageNeighbor {
    fn name(&self) -> &'static str {
        "average-neighbor"
    }

    fn search(&self, grid: &Grid, start: Position, goal: Position) -> Result<Search, PathError> {
        check_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(found(self.name(), Path::from_positions(grid, &[start]), 0));
        }

        let mut nodes = vec![Node {
            pos: start,
            parent: NO_PARENT,
        }];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        let mut visited = CellSet::new(grid.dims());
        let mut nb = Neighbors::new();
        let mut iterations = 0;

        while let Some(ci) = queue.pop_front() {
            if iterations == self.max_iterations {
                return Err(unreachable(self.name(), start, goal, iterations, true));
            }
            iterations += 1;

            let cp = nodes[ci].pos;
            if !visited.insert(cp) {
                continue;
            }

            // Every cell on this entry's own path has already been visited,
            // so the visited set also keeps the path simple.
            let mut candidates = nb.orthogonal(grid, cp, |q| visited.contains(q)).to_vec();
            candidates.sort_by_cached_key(|&q| average_neighbor_cost(grid, q, cp));

            for q in candidates {
                nodes.push(Node { pos: q, parent: ci });
                let qi = nodes.len() - 1;
                if q == goal {
                    let path = Path::from_positions(grid, &reconstruct(&nodes, qi));
                    return Ok(found(self.name(), path, iterations));
                }
                queue.push_back(qi);
            }
        }

        Err(unreachable(self.name(), start, goal, iterations, false))
    }
}

fn reconstruct(nodes: &[Node], mut idx: usize) -> Vec<Position> {
    let mut positions = Vec::new();
    while idx != NO_PARENT {
        positions.push(nodes[idx].pos);
        idx = nodes[idx].parent;
    }
    positions.reverse();
    positions
}

/// Average cost of the neighbours of `p`, `from` excluded.
pub(crate) fn average_neighbor_cost(grid: &Grid, p: Position, from: Position) -> AvgCost {
    let mut avg = AvgCost { sum: 0, count: 0 };
    for q in p.neighbors_4().into_iter().flatten() {
        if q == from {
            continue;
        }
        if let Some(cost) = grid.cost(q) {
            avg.sum += u64::from(cost);
            avg.count += 1;
        }
    }
    avg
}

/// An exact average `sum / count`, compared without division.
///
/// A cell with no neighbours besides the one it is reached from has
/// `count == 0` and orders after every real average.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AvgCost {
    sum: u64,
    count: u64,
}

impl Ord for AvgCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.count, other.count) {
            (0, 0) => Ordering::Equal,
            (0, _) => Ordering::Greater,
            (_, 0) => Ordering::Less,
            _ => (self.sum * other.count).cmp(&(other.sum * self.count)),
        }
    }
}

impl PartialOrd for AvgCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AvgCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AvgCost {}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::TerrainKind;

    #[test]
    fn fewest_cells() {
        let g = Grid::parse("rss\nrss\nrrr").unwrap();
        let search = AverageNeighbor::default()
            .search(&g, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        assert_eq!(search.path.len(), 5);
        assert!(search.path.is_contiguous());
        assert!(search.path.is_simple());
    }

    #[test]
    fn lookahead_scores_surroundings_not_the_cell() {
        // South of the start looks cheaper than east (road vs. stone around
        // it). From (1, 0) the stone centre ties with (2, 0) on surroundings
        // and comes first in north/east/south/west order, so the route
        // crosses it: the lookahead never looks at a candidate's own cost.
        let g = Grid::parse("rrs\nrsr\nrrr").unwrap();
        let path = AverageNeighbor::default()
            .find_path(&g, Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        let ps: Vec<Position> = path.positions().collect();
        assert_eq!(
            ps,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn average_ignores_origin() {
        let g = Grid::parse("srr\nrgm").unwrap();
        // Neighbours of (0, 1) other than (0, 0): (0, 2) road, (1, 1) grass.
        let avg = average_neighbor_cost(&g, Position::new(0, 1), Position::new(0, 0));
        assert_eq!(avg, AvgCost { sum: 5, count: 2 });
    }

    #[test]
    fn dead_end_scores_last() {
        let dead = AvgCost { sum: 0, count: 0 };
        let costly = AvgCost { sum: 2000, count: 2 };
        let cheap = AvgCost { sum: 4, count: 2 };
        assert!(dead > costly);
        assert!(cheap < costly);
        assert_eq!(AvgCost { sum: 6, count: 3 }, AvgCost { sum: 4, count: 2 });
    }

    #[test]
    fn corridor() {
        let g = Grid::filled(1, 6, TerrainKind::Mud).unwrap();
        let path = AverageNeighbor::default()
            .find_path(&g, Position::new(0, 5), Position::new(0, 0))
            .unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.total_cost(), 30);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::filled(1, 1, TerrainKind::Water).unwrap();
        let p = Position::new(0, 0);
        let path = AverageNeighbor::default().find_path(&g, p, p).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_cost(), 500);
    }

    #[test]
    fn iteration_cap_is_unreachable() {
        let g = Grid::filled(8, 8, TerrainKind::Road).unwrap();
        let err = AverageNeighbor::new(2)
            .find_path(&g, Position::new(0, 0), Position::new(7, 7))
            .unwrap_err();
        assert!(matches!(err, PathError::Unreachable { iterations: 2, .. }));
    }
}
