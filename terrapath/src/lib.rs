//! terrapath: plan routes across weighted terrain maps.
//!
//! The binary is a thin wrapper around [`run`]; the modules are public so
//! the pieces can be tested and reused.

pub mod cli;
pub mod config;
pub mod render;

use std::fs;
use std::io::Write;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use terrapath_core::mapgen::road_network;
use terrapath_core::{Dims, Grid, Position};
use terrapath_paths::StrategyKind;

use cli::Cli;
use config::Config;
use render::Report;

/// Load the map, run the selected strategies and write their reports to `out`.
///
/// Fails if the map or config cannot be loaded, or if any strategy finds no
/// route. Reports are written before a strategy failure is returned.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(kind) = cli.strategy {
        config.strategy = kind;
    }
    if let Some(max) = cli.max_iterations {
        config.search.max_iterations = max;
    }
    log::info!(
        "strategy {}, at most {} iterations",
        config.strategy,
        config.search.max_iterations
    );

    let grid = load_grid(cli)?;
    log::info!("map {} ({} cells)", grid.dims(), grid.len());

    let goal = cli
        .goal
        .unwrap_or_else(|| Position::new(grid.rows() - 1, grid.cols() - 1));
    let kinds = if cli.all {
        StrategyKind::ALL.to_vec()
    } else {
        vec![config.strategy]
    };

    let reports: Vec<Report> = kinds
        .iter()
        .map(|kind| {
            let strategy = kind.build(&config.search);
            Report::new(kind.name(), strategy.search(&grid, cli.start, goal))
        })
        .collect();

    if cli.json {
        writeln!(out, "{}", render::to_json(&reports)?)?;
    } else {
        write!(out, "{}", render::to_text(&reports, &grid))?;
    }

    let failed = reports.iter().filter(|r| !r.is_found()).count();
    match (failed, reports.len()) {
        (0, _) => Ok(()),
        (_, 1) => bail!("no route from {} to {goal}", cli.start),
        (n, total) => bail!("{n} of {total} strategies found no route"),
    }
}

fn load_grid(cli: &Cli) -> anyhow::Result<Grid> {
    if let Some(Dims { rows, cols }) = cli.random {
        let seed = cli.seed.unwrap_or_else(rand::random);
        log::info!("generating {rows}x{cols} map with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let walks = 1 + rows.max(cols) / 4;
        return road_network(rows, cols, walks, rows + cols, &mut rng)
            .context("generating random map");
    }
    let Some(path) = &cli.map else {
        bail!("no map given");
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading map {}", path.display()))?;
    Grid::parse(&text).with_context(|| format!("parsing map {}", path.display()))
}
