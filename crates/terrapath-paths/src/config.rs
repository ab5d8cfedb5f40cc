//! Search limits and strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::astar::Heuristic;
use crate::backtrack::Backtracking;
use crate::bfs::AverageNeighbor;
use crate::traits::PathStrategy;
use crate::ucs::UniformCost;
use crate::walker::Walker;

/// Default cap on frontier removals per search.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Limits shared by the search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of frontier entries a search may remove before it
    /// gives up with [`PathError::Unreachable`](crate::PathError::Unreachable).
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// The available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    /// Straight-line walker ignoring cost.
    Walker,
    /// Depth-first search with backtracking, cheapest neighbour first.
    Backtracking,
    /// Breadth-first search ordered by average neighbour cost.
    AverageNeighbor,
    /// Uniform-cost search.
    #[default]
    UniformCost,
    /// Uniform-cost search guided by a Manhattan heuristic.
    Heuristic,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Walker,
        StrategyKind::Backtracking,
        StrategyKind::AverageNeighbor,
        StrategyKind::UniformCost,
        StrategyKind::Heuristic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Walker => "walker",
            StrategyKind::Backtracking => "backtracking",
            StrategyKind::AverageNeighbor => "average-neighbor",
            StrategyKind::UniformCost => "uniform-cost",
            StrategyKind::Heuristic => "heuristic",
        }
    }

    /// Instantiate the strategy with the given limits.
    pub fn build(self, config: &SearchConfig) -> Box<dyn PathStrategy> {
        match self {
            StrategyKind::Walker => Box::new(Walker),
            StrategyKind::Backtracking => Box::new(Backtracking::new(config.max_iterations)),
            StrategyKind::AverageNeighbor => Box::new(AverageNeighbor::new(config.max_iterations)),
            StrategyKind::UniformCost => Box::new(UniformCost::new(config.max_iterations)),
            StrategyKind::Heuristic => Box::new(Heuristic::new(config.max_iterations)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected one of: walker, backtracking, average-neighbor, uniform-cost, heuristic)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
