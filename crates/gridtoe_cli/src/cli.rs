//! Command-line interface for gridtoe.

use clap::{Parser, Subcommand};
use gridtoe::{Coord, Mark};
use std::path::PathBuf;

/// gridtoe - headless N×N tic-tac-toe replay driver
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Replay placements against an N×N tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board settings shared by subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct BoardArgs {
    /// TOML file with `side` and `starting_mark`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Side length (overrides the config file)
    #[arg(short, long)]
    pub side: Option<usize>,

    /// Mark that moves first, x or o (overrides the config file)
    #[arg(long)]
    pub start: Option<Mark>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply placements in order and print each outcome
    Replay {
        #[command(flatten)]
        board: BoardArgs,

        /// Emit one JSON object per line instead of text
        #[arg(long)]
        json: bool,

        /// Placements as x,y (column,row), zero-based
        #[arg(value_name = "X,Y")]
        moves: Vec<Coord>,
    },

    /// List every line of the board in evaluation order
    Lines {
        #[command(flatten)]
        board: BoardArgs,
    },
}
