use terrapath_core::{Grid, Position};

/// Orthogonal neighbours of `p` inside `grid`, in north, east, south, west
/// order, skipping any for which `exclude` returns `true`.
///
/// The order is relied on for tie-breaking by every strategy.
pub fn neighbors(grid: &Grid, p: Position, exclude: impl Fn(Position) -> bool) -> Vec<Position> {
    let mut buf = Neighbors::new();
    buf.orthogonal(grid, p, exclude).to_vec()
}

/// Reusable neighbour buffer.
///
/// Same query as [`neighbors`] without allocating per call.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds orthogonal neighbours of `p` (north, east,
    /// south, west) for which `exclude` returns `false`.
    pub fn orthogonal(
        &mut self,
        grid: &Grid,
        p: Position,
        exclude: impl Fn(Position) -> bool,
    ) -> &[Position] {
        self.buf.clear();
        for n in p.neighbors_4().into_iter().flatten() {
            if grid.contains(n) && !exclude(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::TerrainKind;

    fn grid3() -> Grid {
        Grid::filled(3, 3, TerrainKind::Road).unwrap()
    }

    #[test]
    fn center_has_four_in_order() {
        let g = grid3();
        let n = neighbors(&g, Position::new(1, 1), |_| false);
        assert_eq!(
            n,
            vec![
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn corners_are_clipped() {
        let g = grid3();
        assert_eq!(
            neighbors(&g, Position::new(0, 0), |_| false),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(
            neighbors(&g, Position::new(2, 2), |_| false),
            vec![Position::new(1, 2), Position::new(2, 1)]
        );
    }

    #[test]
    fn excluded_cells_are_skipped() {
        let g = grid3();
        let excluded = [Position::new(0, 1), Position::new(2, 1)];
        let n = neighbors(&g, Position::new(1, 1), |p| excluded.contains(&p));
        assert_eq!(n, vec![Position::new(1, 2), Position::new(1, 0)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let g = Grid::filled(1, 1, TerrainKind::Mud).unwrap();
        assert!(neighbors(&g, Position::new(0, 0), |_| false).is_empty());
    }

    #[test]
    fn buffer_is_reused() {
        let g = grid3();
        let mut nb = Neighbors::new();
        assert_eq!(nb.orthogonal(&g, Position::new(1, 1), |_| false).len(), 4);
        assert_eq!(nb.orthogonal(&g, Position::new(0, 0), |_| false).len(), 2);
    }
}
