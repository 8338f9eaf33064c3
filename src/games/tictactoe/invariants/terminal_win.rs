//! Terminal win invariant: nothing is recorded after a winning board.

use super::super::GameState;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: A winning board is always the last history entry.
pub struct TerminalWinInvariant;

impl Invariant<GameState> for TerminalWinInvariant {
    fn holds(state: &GameState) -> bool {
        let len = state.history.len();
        state
            .history
            .iter()
            .take(len.saturating_sub(1))
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a board with a winner"
    }
}
