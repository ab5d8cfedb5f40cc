use terrapath_core::{Dims, Position};

/// A set of grid positions backed by a flat boolean array.
pub(crate) struct CellSet {
    dims: Dims,
    marks: Vec<bool>,
}

impl CellSet {
    pub(crate) fn new(dims: Dims) -> Self {
        Self {
            dims,
            marks: vec![false; dims.len()],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, p: Position) -> bool {
        self.dims.index(p).is_some_and(|i| self.marks[i])
    }

    /// Mark `p`. Returns `true` if it was not already marked.
    #[inline]
    pub(crate) fn insert(&mut self, p: Position) -> bool {
        match self.dims.index(p) {
            Some(i) if !self.marks[i] => {
                self.marks[i] = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn remove(&mut self, p: Position) {
        if let Some(i) = self.dims.index(p) {
            self.marks[i] = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = CellSet::new(Dims::new(2, 3));
        let p = Position::new(1, 2);
        assert!(!set.contains(p));
        assert!(set.insert(p));
        assert!(!set.insert(p));
        assert!(set.contains(p));
        assert_eq!(set.len(), 1);
        set.remove(p);
        assert!(!set.contains(p));
        // Out-of-bounds positions are never members.
        assert!(!set.insert(Position::new(5, 5)));
        assert!(!set.contains(Position::new(5, 5)));
    }
}
