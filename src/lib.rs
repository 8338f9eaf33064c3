//! Tic-tac-toe with branching move history and time travel.
//!
//! # Architecture
//!
//! - **Games**: the pure game core ([`GameState`], rules, contracts, invariants)
//! - **Settings**: optional TOML settings for the terminal views
//! - **View**: [`Snapshot`], the render-ready form of a game
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Player};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |s, i| s.apply_move(i));
//! assert_eq!(state.winner(), Some(Player::X));
//!
//! let earlier = state.jump_to_step(2).unwrap();
//! assert_eq!(earlier.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;
mod view;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Cell, Contract, GameState, GameStatus,
    HistoryConsistentInvariant, HistoryError, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, MoveLabel, NoWinnerYet, Player,
    Position, Square, SquareIsEmpty, TerminalWinInvariant, TicTacToeInvariants, check_winner,
    is_draw, is_full, move_label, winning_line,
};

// Crate-level exports - Settings
pub use settings::{HistoryOrder, Settings, SettingsError};

// Crate-level exports - View
pub use view::{HistoryEntry, Snapshot};
