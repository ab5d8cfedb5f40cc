//! Random terrain generation.
//!
//! Two generators:
//! - [`random_grid`]: every cell drawn uniformly from [`TerrainKind::ALL`].
//! - [`road_network`]: random terrain with road cells carved by
//!   4-directional random walks, which gives the cheap strategies something
//!   to find.

use rand::Rng;

use crate::error::GridError;
use crate::geom::{Dims, Position};
use crate::grid::Grid;
use crate::terrain::TerrainKind;

fn random_kind(rng: &mut impl Rng) -> TerrainKind {
    TerrainKind::ALL[rng.random_range(0..TerrainKind::ALL.len())]
}

/// A `rows × cols` grid of uniformly random terrain.
pub fn random_grid(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Grid, GridError> {
    let dims = Dims::new(rows, cols);
    if dims.is_empty() {
        return Err(GridError::Empty);
    }
    let kinds = (0..dims.len()).map(|_| random_kind(rng)).collect();
    Ok(Grid::from_flat(dims, kinds))
}

/// Random terrain overlaid with `walks` random-walk roads of `steps` steps each.
///
/// Each walk starts at a random cell and moves to a random in-bounds
/// orthogonal neighbour per step, paving every cell it visits.
pub fn road_network(
    rows: usize,
    cols: usize,
    walks: usize,
    steps: usize,
    rng: &mut impl Rng,
) -> Result<Grid, GridError> {
    let dims = Dims::new(rows, cols);
    if dims.is_empty() {
        return Err(GridError::Empty);
    }
    let mut kinds: Vec<TerrainKind> = (0..dims.len()).map(|_| random_kind(rng)).collect();

    for _ in 0..walks {
        let mut p = dims.position(rng.random_range(0..dims.len()));
        for _ in 0..steps {
            if let Some(i) = dims.index(p) {
                kinds[i] = TerrainKind::Road;
            }
            p = random_step(dims, p, rng);
        }
    }

    Ok(Grid::from_flat(dims, kinds))
}

fn random_step(dims: Dims, p: Position, rng: &mut impl Rng) -> Position {
    let mut options = [p; 4];
    let mut n = 0;
    for q in p.neighbors_4().into_iter().flatten() {
        if dims.contains(q) {
            options[n] = q;
            n += 1;
        }
    }
    if n == 0 {
        // 1×1 grid.
        return p;
    }
    options[rng.random_range(0..n)]
}
