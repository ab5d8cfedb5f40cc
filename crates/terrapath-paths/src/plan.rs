use terrapath_core::{Grid, Position, TerrainKind};

use crate::config::{SearchConfig, StrategyKind};
use crate::error::PathError;
use crate::path::Path;

/// Build a grid from raw terrain rows and plan a route across it.
///
/// Grid construction failures surface as [`PathError::InvalidGrid`].
pub fn plan(
    kind: StrategyKind,
    rows: Vec<Vec<TerrainKind>>,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Path, PathError> {
    let grid = Grid::new(rows)?;
    kind.build(config).find_path(&grid, start, goal)
}
