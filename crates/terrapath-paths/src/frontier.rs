//! Ordered frontier of [`PartialPath`]s shared by the cost-based strategies.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use terrapath_core::{Grid, Position};

use crate::error::PathError;
use crate::marks::CellSet;
use crate::neighbors::Neighbors;
use crate::path::PartialPath;
use crate::traits::{Search, check_endpoints, found, unreachable};

/// Heap entry ordered by `(priority, length, seq)`, smallest first.
///
/// `seq` is the insertion counter, so entries that tie on priority and
/// length come out in the order they went in.
struct Entry {
    priority: u64,
    length: usize,
    seq: u64,
    partial: PartialPath,
}

impl Entry {
    fn key(&self) -> (u64, usize, u64) {
        (self.priority, self.length, self.seq)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

/// A min-priority queue of partial paths.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: u64, partial: PartialPath) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            length: partial.length(),
            seq,
            partial,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<PartialPath> {
        self.heap.pop().map(|e| e.partial)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Best-first search over partial paths.
///
/// Entries are ordered by `accumulated_cost + estimate(last)`, then by
/// length. A cell is finalized when an entry ending there is first removed;
/// later entries ending at a finalized cell are dropped. With a zero
/// estimate this is uniform-cost search; with a consistent estimate, A*.
pub(crate) fn best_first(
    strategy: &str,
    grid: &Grid,
    start: Position,
    goal: Position,
    max_iterations: usize,
    estimate: impl Fn(Position) -> u64,
) -> Result<Search, PathError> {
    check_endpoints(grid, start, goal)?;

    let mut frontier = Frontier::new();
    let mut finalized = CellSet::new(grid.dims());
    let mut nb = Neighbors::new();
    let mut iterations = 0;

    let root = PartialPath::new(start, grid.cost(start).unwrap_or_default());
    frontier.push(root.accumulated_cost() + estimate(start), root);

    while let Some(partial) = frontier.pop() {
        if iterations == max_iterations {
            return Err(unreachable(strategy, start, goal, iterations, true));
        }
        iterations += 1;

        let last = partial.last();
        if !finalized.insert(last) {
            continue;
        }
        if last == goal {
            return Ok(found(strategy, partial.into_path(grid), iterations));
        }

        let next = nb.orthogonal(grid, last, |q| finalized.contains(q) || partial.contains(q));
        for &q in next {
            let Some(cost) = grid.cost(q) else {
                continue;
            };
            let child = partial.extend(q, cost);
            let priority = child.accumulated_cost() + estimate(q);
            frontier.push(priority, child);
        }
        log::trace!(
            "{strategy}: finalized {last} at cost {}, frontier {}",
            partial.accumulated_cost(),
            frontier.len()
        );
    }

    Err(unreachable(strategy, start, goal, iterations, false))
}
