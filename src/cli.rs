//! Command-line interface for strictly_tris.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tris - history-driven tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tris")]
#[command(about = "Two-player tic-tac-toe derived from a move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML config with player names and log filter
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Display name for X (overrides config)
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O (overrides config)
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Print the board and outcome of a saved history
    Replay {
        /// JSON array of moves, most recent first
        file: PathBuf,
    },
}
