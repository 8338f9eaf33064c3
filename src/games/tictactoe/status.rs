//! Game status and history labels derived from a [`GameState`].
//!
//! [`GameState`]: super::GameState

use super::rules::{check_winner, is_full};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// Status of the board at the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues and this player moves next.
    Next(Player),
    /// A player has three in a row.
    Won(Player),
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// Evaluates a board given the player whose turn it would be.
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::Next(to_move)
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once no further move can be placed.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Next(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Next(player) => write!(f, "Next player: {}", player),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Label for one entry of the history jump list.
///
/// Depends only on the step index, never on board contents, so the
/// step doubles as a stable identity key for the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveLabel {
    /// Step 0, the empty board.
    GameStart,
    /// Step `n`, the board after `n` moves.
    Move(usize),
}

impl MoveLabel {
    /// Label for the given history step.
    pub fn for_step(step: usize) -> Self {
        if step == 0 {
            MoveLabel::GameStart
        } else {
            MoveLabel::Move(step)
        }
    }

    /// History step this label jumps to.
    pub fn step(&self) -> usize {
        match self {
            MoveLabel::GameStart => 0,
            MoveLabel::Move(step) => *step,
        }
    }

    /// Label text with the location of the move appended, e.g.
    /// `Go to move #3 (row 1, col 2)`.
    pub fn with_location(&self, location: Option<Position>) -> String {
        match location {
            Some(pos) => format!("{} (row {}, col {})", self, pos.row() + 1, pos.column() + 1),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => write!(f, "Go to game start"),
            MoveLabel::Move(step) => write!(f, "Go to move #{}", step),
        }
    }
}

/// Label for history entry `step`.
pub fn move_label(step: usize) -> MoveLabel {
    MoveLabel::for_step(step)
}
