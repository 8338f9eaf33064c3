//! History consistency invariant: history starts empty and the view is in range.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History has an empty root and the viewed step exists.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.first() == Some(&Board::new()) && state.step < state.history.len()
    }

    fn description() -> &'static str {
        "History starts with an empty board and the current step is recorded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState {
            history: Vec::new(),
            step: 0,
        };
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_marked_root_violates() {
        let state = GameState {
            history: vec![Board::new().with_mark(Position::Center, Player::X)],
            step: 0,
        };
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new().apply_move(0);
        state.step = 2;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
