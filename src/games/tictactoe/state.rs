//! Game state with branching move history.
//!
//! A [`GameState`] is an immutable value: every transition returns a new
//! state and leaves the receiver untouched, so a caller holding an older
//! state keeps seeing it unchanged.
//!
//! The state stores only the list of board snapshots and the step being
//! viewed. Whose turn it is, the winner, and the status are all derived
//! from those two fields.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::check_winner;
use super::status::{GameStatus, MoveLabel};
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Error returned when jumping to a step that was never recorded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Step lies outside `0..len`.
    #[display("Step {} is outside the recorded history ({} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded history entries.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Tic-tac-toe game with time travel.
///
/// Invariants (checked by [`TicTacToeInvariants`] after each move in
/// debug builds):
/// - `history[0]` is the empty board
/// - each later entry adds exactly one mark for the player whose turn it was
/// - no entry follows a board that already has a winner
/// - `step < history.len()`
///
/// [`TicTacToeInvariants`]: super::TicTacToeInvariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

impl GameState {
    /// Creates a new game: one empty board, viewing step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Returns every recorded board, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the step currently being viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the board at the current step.
    pub fn active_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the player to move: X on even steps, O on odd steps.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Returns the winner on the active board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.active_board())
    }

    /// Returns the status line for the active board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.active_board(), self.current_player())
    }

    /// Places the current player's mark at `index`, reporting why a move
    /// was refused.
    ///
    /// Any history after the current step is discarded before the new board
    /// is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not in 0..=8
    /// - [`MoveError::GameOver`] if the active board already has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(step = self.step, player = %self.current_player()))]
    pub fn try_apply_move(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        MoveContract::pre(self, &pos)?;

        let board = self.active_board().with_mark(pos, self.current_player());
        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(board);

        let next = Self {
            step: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(position = %pos, discarded, new_step = next.step, "Move applied");
        Ok(next)
    }

    /// Places the current player's mark at `index`.
    ///
    /// A refused move (occupied square, finished game, or index off the
    /// board) is a no-op: the returned state equals `self`.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&self, index: usize) -> Self {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, index, "Move ignored");
                self.clone()
            }
        }
    }

    /// Same as [`apply_move`](Self::apply_move) with a named position.
    pub fn apply_position(&self, pos: Position) -> Self {
        self.apply_move(pos.to_index())
    }

    /// Views a recorded step without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` was never recorded.
    /// The step is never clamped.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_step(&self, step: usize) -> Result<Self, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        debug!(from = self.step, to = step, "Jumping in history");
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }

    /// Labels for every recorded step, oldest first.
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        (0..self.history.len()).map(MoveLabel::for_step).collect()
    }

    /// Position marked at `step`, or `None` for step 0 and unknown steps.
    pub fn last_move(&self, step: usize) -> Option<Position> {
        self.move_at(step).map(|m| m.position)
    }

    /// Move that produced the board at `step`.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.history.get(step - 1)?;
        let after = self.history.get(step)?;
        Move::between(before, after)
    }

    /// Every recorded move, oldest first, including steps after the one
    /// being viewed.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.history.len())
            .filter_map(|step| self.move_at(step))
            .collect()
    }

    /// Positions where a move would be accepted right now.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.active_board())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
