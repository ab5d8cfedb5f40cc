//! Route planning strategies for weighted terrain grids.
//!
//! Five interchangeable strategies implement [`PathStrategy`], trading
//! optimality for simplicity:
//!
//! | Strategy | Order | Guarantee |
//! |---|---|---|
//! | [`Walker`] | rows, then columns | none (ignores cost) |
//! | [`Backtracking`] | depth-first, cheapest neighbour first | none |
//! | [`AverageNeighbor`] | breadth-first, lookahead tie-break | fewest cells |
//! | [`UniformCost`] | accumulated cost | minimum cost |
//! | [`Heuristic`] | cost + Manhattan bound | minimum cost |
//!
//! Every call owns its frontier; nothing outlives a single
//! [`find_path`](PathStrategy::find_path). The searching strategies stop
//! after [`SearchConfig::max_iterations`] frontier removals and report
//! [`PathError::Unreachable`].

mod astar;
mod backtrack;
mod bfs;
mod config;
mod error;
mod frontier;
mod marks;
mod neighbors;
mod path;
mod plan;
mod traits;
mod ucs;
mod walker;


pub use astar::{Heuristic, heuristic};
pub use backtrack::Backtracking;
pub use bfs::AverageNeighbor;
pub use config::{DEFAULT_MAX_ITERATIONS, SearchConfig, StrategyKind, UnknownStrategy};
pub use error::PathError;
pub use neighbors::{Neighbors, neighbors};
pub use path::{PartialPath, Path};
pub use plan::plan;
pub use traits::{PathStrategy, Search};
pub use ucs::UniformCost;
pub use walker::Walker;

pub use terrapath_core::{Cell, Grid, Position, TerrainKind};
