//! The [`Grid`] type: an immutable rectangle of terrain [`Cell`]s.
//!
//! Cells are stored flat in row-major order. A built grid is never empty,
//! always rectangular, and every cell cost is positive.
//!
//! The text format has one line per row and one terrain character per cell
//! (see [`TerrainKind::rune`]):
//!
//! ```text
//! rrgm
//! rsgd
//! wwrr
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Dims, Position};
use crate::terrain::TerrainKind;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One grid position together with its terrain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Position,
    pub kind: TerrainKind,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Position, kind: TerrainKind) -> Self {
        Self { pos, kind }
    }

    /// Cost of entering this cell.
    #[inline]
    pub const fn cost(self) -> u32 {
        self.kind.cost()
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular map of terrain cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    kinds: Vec<TerrainKind>,
    min_cost: u32,
}

impl Grid {
    /// Build a grid from rows of terrain kinds.
    ///
    /// Fails with [`GridError::Empty`] if there are no rows or the rows are
    /// empty, and with [`GridError::Ragged`] if rows differ in length.
    pub fn new(rows: Vec<Vec<TerrainKind>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let dims = Dims::new(rows.len(), cols);
        let mut kinds = Vec::with_capacity(dims.len());
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            kinds.extend(cells);
        }
        Ok(Self::from_flat(dims, kinds))
    }

    /// A `rows × cols` grid where every cell has the same kind.
    pub fn filled(rows: usize, cols: usize, kind: TerrainKind) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(Self::from_flat(dims, vec![kind; dims.len()]))
    }

    /// Parse the text map format.
    ///
    /// Leading/trailing whitespace is trimmed from the whole text and from
    /// each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut rows = Vec::new();
        for (row, line) in s.lines().enumerate() {
            let cells = line
                .trim()
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    TerrainKind::from_rune(ch).ok_or(GridError::UnknownTerrain { ch, row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::new(rows)
    }

    /// Caller guarantees `kinds.len() == dims.len()` and `dims` is non-empty.
    pub(crate) fn from_flat(dims: Dims, kinds: Vec<TerrainKind>) -> Self {
        debug_assert_eq!(kinds.len(), dims.len());
        let min_cost = kinds.iter().map(|k| k.cost()).min().unwrap_or(1);
        Self {
            dims,
            kinds,
            min_cost,
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false` for a built grid; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.dims.contains(p)
    }

    /// Terrain kind at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Position) -> Option<TerrainKind> {
        self.dims.index(p).map(|i| self.kinds[i])
    }

    /// Cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Position) -> Option<Cell> {
        self.kind(p).map(|kind| Cell::new(p, kind))
    }

    /// Cost of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cost(&self, p: Position) -> Option<u32> {
        self.kind(p).map(TerrainKind::cost)
    }

    /// Smallest cell cost anywhere in the grid.
    #[inline]
    pub fn min_cost(&self) -> u32 {
        self.min_cost
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| Cell::new(self.dims.position(i), kind))
    }

    /// The terrain row `row` as a slice, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[TerrainKind]> {
        if row >= self.dims.rows {
            return None;
        }
        let start = row * self.dims.cols;
        Some(&self.kinds[start..start + self.dims.cols])
    }

    /// Rows rendered in the text format, one `String` per row.
    pub fn to_lines(&self) -> Vec<String> {
        self.kinds
            .chunks(self.dims.cols)
            .map(|row| row.iter().map(|k| k.rune()).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.to_lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

// A grid serializes as its text rows so that deserializing re-runs validation.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lines().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = Vec::<String>::deserialize(deserializer)?;
        Grid::parse(&lines.join("\n")).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("rg\nsw").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"["rg","sw"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let result: Result<Grid, _> = serde_json::from_str(r#"["rg","s"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(Position::new(3, 7), TerrainKind::Water);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
