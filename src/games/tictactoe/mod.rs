//! Tic-tac-toe with branching move history.
//!
//! The [`GameState`] is the single source of truth: a list of board
//! snapshots plus the step being viewed. Views call
//! [`GameState::apply_move`] and [`GameState::jump_to_step`] and render
//! what the state exposes.

mod action;
mod contracts;
mod invariants;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, MoveContract, NoWinnerYet, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TerminalWinInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use state::{GameState, HistoryError};
pub use status::{GameStatus, MoveLabel, move_label};
pub use types::{Board, Player, Square};

/// Alias for the tri-state cell value.
pub type Cell = Square;
