//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use terrapath_core::{Dims, Position};
use terrapath_paths::StrategyKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text map, one row per line, one terrain letter (s w r g m d) per cell
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random map of the given size instead of reading one
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dims)]
    pub random: Option<Dims>,

    /// Seed for --random
    #[arg(long, requires = "random", conflicts_with = "map")]
    pub seed: Option<u64>,

    /// Start cell
    #[arg(long, value_name = "R,C", value_parser = parse_position, default_value = "0,0")]
    pub start: Position,

    /// Goal cell [default: bottom-right corner]
    #[arg(long, value_name = "R,C", value_parser = parse_position)]
    pub goal: Option<Position>,

    /// Strategy to run, overriding the config file
    #[arg(short, long, conflicts_with = "all")]
    pub strategy: Option<StrategyKind>,

    /// Run every strategy
    #[arg(long)]
    pub all: bool,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Frontier removals allowed per search, overriding the config file
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Print routes as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `R,C` into a position.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected R,C, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Position::new(row, col))
}

/// Parse `ROWSxCOLS` into non-empty dimensions.
pub fn parse_dims(s: &str) -> Result<Dims, String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: usize = rows
        .trim()
        .parse()
        .map_err(|e| format!("bad row count {rows:?}: {e}"))?;
    let cols: usize = cols
        .trim()
        .parse()
        .map_err(|e| format!("bad column count {cols:?}: {e}"))?;
    let dims = Dims::new(rows, cols);
    if dims.is_empty() {
        return Err(format!("map must have at least one cell, got {dims}"));
    }
    if rows.checked_mul(cols).is_none() {
        return Err(format!("map of {dims} cells is too large"));
    }
    Ok(dims)
}
