//! Render-ready snapshot of a game for the terminal views.
//!
//! A [`Snapshot`] collects everything a view shows: the active board, the
//! status line, and the history jump list. Both the TUI and `play` build
//! their output from it.

use crate::games::tictactoe::{GameState, GameStatus, MoveLabel, Player, Position, winning_line};
use crate::settings::{HistoryOrder, Settings};
use serde::Serialize;
use tracing::instrument;

/// One row of the history jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Step this entry jumps to. Stable across re-renders.
    pub step: usize,
    /// Jump label.
    pub label: MoveLabel,
    /// Label text as shown, including the location when enabled.
    pub text: String,
    /// Square marked at this step.
    pub location: Option<Position>,
    /// True for the step being viewed.
    pub current: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Step being viewed.
    pub step: usize,
    /// Marks on the active board in row-major order.
    pub board: [Option<Player>; 9],
    /// Board status.
    pub status: GameStatus,
    /// Status line text, e.g. `Next player: O`.
    pub status_line: String,
    /// Squares to highlight when the game is won.
    pub winning_line: Option<[Position; 3]>,
    /// History entries in display order.
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// Builds the snapshot for `state`.
    #[instrument(skip_all, fields(step = state.step()))]
    pub fn of(state: &GameState, settings: &Settings) -> Self {
        let board = state.active_board();
        let status = state.status();

        let mut history: Vec<HistoryEntry> = state
            .move_labels()
            .into_iter()
            .map(|label| {
                let step = label.step();
                let location = state.last_move(step);
                let text = if *settings.show_locations() {
                    label.with_location(location)
                } else {
                    label.to_string()
                };
                HistoryEntry {
                    step,
                    label,
                    text,
                    location,
                    current: step == state.step(),
                }
            })
            .collect();

        if *settings.history_order() == HistoryOrder::Descending {
            history.reverse();
        }

        Self {
            step: state.step(),
            board: board.squares().map(|sq| sq.player()),
            status,
            status_line: status.to_string(),
            winning_line: winning_line(board),
            history,
        }
    }

    /// Index into [`history`](Self::history) of the current step.
    pub fn current_row(&self) -> usize {
        self.history.iter().position(|e| e.current).unwrap_or(0)
    }

    /// Plain-text rendering: board grid, status, then the history list
    /// with the current step marked by `>`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let idx = row * 3 + col;
                    match self.board[idx] {
                        Some(player) => player.to_string(),
                        None => (idx + 1).to_string(),
                    }
                })
                .collect();
            out.push_str(&cells.join("|"));
            out.push('\n');
            if row < 2 {
                out.push_str("-+-+-\n");
            }
        }

        out.push('\n');
        out.push_str(&self.status_line);
        out.push_str("\n\n");

        for entry in &self.history {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.text));
        }
        out
    }
}
