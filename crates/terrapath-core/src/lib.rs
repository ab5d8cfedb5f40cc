//! **terrapath-core**: grid and terrain types for route planning.
//!
//! This crate provides the input model shared by the *terrapath* planners:
//! geometry primitives, the fixed terrain cost table, an immutable grid of
//! terrain cells with a text map format, and random map generators.

pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod terrain;

pub use error::GridError;
pub use geom::{Dims, Position};
pub use grid::{Cell, Grid};
pub use terrain::TerrainKind;
