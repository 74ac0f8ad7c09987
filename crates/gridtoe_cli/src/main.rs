//! gridtoe - headless replay driver
//!
//! Applies a sequence of placements to a configured board and prints the
//! outcome of each one.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use gridtoe::{Board, BoardConfig, Coord};
use report::{FinalReport, PlacementReport};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { board, json, moves } => run_replay(&board, json, &moves),
        Command::Lines { board } => run_lines(&board),
    }
}

/// Resolves the board configuration from file and flag overrides.
#[instrument]
fn resolve_config(args: &BoardArgs) -> Result<BoardConfig> {
    let mut config = match &args.config {
        Some(path) => BoardConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(side) = args.side {
        config = config.with_side(side);
    }
    if let Some(start) = args.start {
        config = config.with_starting_mark(start);
    }
    config.validate()?;
    debug!(?config, "Resolved board config");
    Ok(config)
}

/// Replays `moves` and prints each outcome.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(args: &BoardArgs, json: bool, moves: &[Coord]) -> Result<()> {
    let mut board: Board = resolve_config(args)?.build()?;
    info!(side = board.side(), "Starting replay");

    for (index, coord) in moves.iter().enumerate() {
        let mark = board.active_mark();
        let outcome = board
            .place_mark(coord.x, coord.y)
            .with_context(|| format!("Placement {} at {} rejected", index + 1, coord))?;

        if json {
            let report = PlacementReport {
                index,
                mark,
                coord: *coord,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report::placement_line(index, mark, *coord, &outcome));
        }
    }

    if json {
        let report = FinalReport {
            board: board.snapshot(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!();
        println!("{}", report::summary(&board));
    }

    Ok(())
}

/// Prints every line of the configured board.
#[instrument]
fn run_lines(args: &BoardArgs) -> Result<()> {
    let config = resolve_config(args)?;
    for line in report::line_listing(*config.side()) {
        println!("{}", line);
    }
    Ok(())
}
