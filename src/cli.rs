//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Replay a list of moves and print the result
    Play {
        /// Board indices (0-8) or position labels, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,

        /// Step to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `play`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board, status line and history list
    Text,
    /// JSON snapshot
    Json,
}
