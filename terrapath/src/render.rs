//! Text and JSON output for planned routes.

use serde::Serialize;
use terrapath_core::{Dims, Grid};
use terrapath_paths::{Path, PathError, Search};

/// Result of running one strategy.
#[derive(Debug, Serialize)]
pub struct Report {
    pub strategy: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Found {
        cells: usize,
        cost: u64,
        iterations: usize,
        path: Path,
    },
    Failed {
        error: String,
    },
}

impl Report {
    pub fn new(strategy: &'static str, result: Result<Search, PathError>) -> Self {
        let outcome = match result {
            Ok(Search { path, iterations }) => Outcome::Found {
                cells: path.len(),
                cost: path.total_cost(),
                iterations,
                path,
            },
            Err(e) => Outcome::Failed {
                error: e.to_string(),
            },
        };
        Self { strategy, outcome }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    /// One summary line, followed by the overlaid map when a route was found.
    pub fn to_text(&self, grid: &Grid) -> String {
        match &self.outcome {
            Outcome::Found {
                cells,
                cost,
                iterations,
                path,
            } => format!(
                "{}: {cells} cells, cost {cost}, {iterations} iterations\n{}",
                self.strategy,
                overlay(grid, path)
            ),
            Outcome::Failed { error } => format!("{}: {error}\n", self.strategy),
        }
    }
}

/// Draw `grid` with `path` on top: `*` on route cells, `S` and `G` on its
/// endpoints, terrain letters elsewhere.
pub fn overlay(grid: &Grid, path: &Path) -> String {
    let Dims { rows, cols } = grid.dims();
    let mut canvas: Vec<char> = grid.cells().map(|c| c.kind.rune()).collect();
    let mut mark = |p, ch| {
        if let Some(i) = grid.dims().index(p) {
            canvas[i] = ch;
        }
    };
    for p in path.positions() {
        mark(p, '*');
    }
    if let Some(goal) = path.goal() {
        mark(goal, 'G');
    }
    if let Some(start) = path.start() {
        mark(start, 'S');
    }

    let mut out = String::with_capacity((cols + 1) * rows);
    for line in canvas.chunks(cols.max(1)) {
        out.extend(line);
        out.push('\n');
    }
    out
}

pub fn to_json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Join text reports, one blank line apart.
pub fn to_text(reports: &[Report], grid: &Grid) -> String {
    let mut out = String::new();
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&r.to_text(grid));
    }
    out
}
