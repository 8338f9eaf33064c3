//! Tic-tac-toe timeline - unified CLI
//!
//! Interactive terminal play or non-interactive replay of a move list.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use tictactoe_timeline::{GameState, Position, Settings, Snapshot};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui => {
            let settings =
                Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
            tui::run_tui(settings)
        }
        Command::Play {
            moves,
            jump,
            format,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let settings =
                Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
            run_play(&settings, &moves, jump, format)
        }
    }
}

/// Replays `moves` from a fresh game and prints the result.
///
/// Refused moves are skipped with a warning, the same no-op the TUI
/// applies to a click on a taken square.
#[instrument(skip(settings))]
fn run_play(
    settings: &Settings,
    moves: &[String],
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = GameState::new();

    for raw in moves {
        let index = match raw.trim().parse::<usize>() {
            Ok(index) => index,
            Err(_) => Position::from_label_or_number(raw)
                .with_context(|| format!("Unknown position '{}'", raw))?
                .to_index(),
        };

        match state.try_apply_move(index) {
            Ok(next) => state = next,
            Err(e) => warn!(index, error = %e, "Skipping rejected move"),
        }
    }

    if let Some(step) = jump {
        state = state
            .jump_to_step(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(step = state.step(), status = %state.status(), "Replay finished");

    let snapshot = Snapshot::of(&state, settings);
    match format {
        OutputFormat::Text => print!("{}", snapshot.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    Ok(())
}
