//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They are recovered from
//! consecutive history snapshots and can be validated independently of
//! execution.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square went from empty to
    /// occupied and every other square is unchanged.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut placed = None;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(player)) if placed.is_none() => {
                    placed = Some(Move::new(player, pos));
                }
                _ => return None,
            }
        }
        placed
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// Rejected moves leave the game untouched; this type only says why.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
