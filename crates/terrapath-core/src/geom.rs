//! Geometry primitives: [`Position`] and [`Dims`].
//!
//! Positions are `(row, col)` pairs. Rows grow downward and columns grow to
//! the right, so "north" is `row - 1`.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// One step north (`row - 1`), or `None` at the top edge.
    #[inline]
    pub fn north(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(row, self.col))
    }

    /// One step east (`col + 1`). Bounds on the far side are the grid's concern.
    #[inline]
    pub fn east(self) -> Option<Self> {
        self.col.checked_add(1).map(|col| Self::new(self.row, col))
    }

    /// One step south (`row + 1`).
    #[inline]
    pub fn south(self) -> Option<Self> {
        self.row.checked_add(1).map(|row| Self::new(row, self.col))
    }

    /// One step west (`col - 1`), or `None` at the left edge.
    #[inline]
    pub fn west(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self::new(self.row, col))
    }

    /// The four orthogonal neighbours in north, east, south, west order.
    ///
    /// Entries that would leave the `usize` domain are `None`; callers still
    /// need to bounds-check against their grid.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Position>; 4] {
        [self.north(), self.east(), self.south(), self.west()]
    }

    /// The position one step closer to `goal`, closing the row gap first and
    /// the column gap second. Returns `None` once `self == goal`.
    pub fn step_toward(self, goal: Position) -> Option<Position> {
        use std::cmp::Ordering::*;
        match (self.row.cmp(&goal.row), self.col.cmp(&goal.col)) {
            (Less, _) => Some(Self::new(self.row + 1, self.col)),
            (Greater, _) => Some(Self::new(self.row - 1, self.col)),
            (Equal, Less) => Some(Self::new(self.row, self.col + 1)),
            (Equal, Greater) => Some(Self::new(self.row, self.col - 1)),
            (Equal, Equal) => None,
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions: `rows × cols`, both strictly positive for a built grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub const fn index(self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.row * self.cols + p.col)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub const fn position(self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }

    /// Row-major iterator over every position.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        (0..self.len()).map(move |i| self.position(i))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 0);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbors_4_order_and_edges() {
        let p = Position::new(0, 0);
        let n = p.neighbors_4();
        assert_eq!(n[0], None);
        assert_eq!(n[1], Some(Position::new(0, 1)));
        assert_eq!(n[2], Some(Position::new(1, 0)));
        assert_eq!(n[3], None);
    }

    #[test]
    fn step_toward_closes_rows_first() {
        let mut p = Position::new(2, 0);
        let goal = Position::new(0, 2);
        let mut steps = Vec::new();
        while let Some(next) = p.step_toward(goal) {
            steps.push(next);
            p = next;
        }
        assert_eq!(
            steps,
            vec![
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn dims_index_round_trip() {
        let d = Dims::new(3, 4);
        assert_eq!(d.len(), 12);
        assert_eq!(d.index(Position::new(2, 3)), Some(11));
        assert_eq!(d.index(Position::new(3, 0)), None);
        assert_eq!(d.position(7), Position::new(1, 3));
        assert_eq!(d.iter().count(), 12);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Dims::new(3, 7).to_string(), "3x7");
    }
}
