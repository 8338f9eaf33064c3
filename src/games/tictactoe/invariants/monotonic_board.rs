//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Move};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Every history entry after the first differs from its predecessor in
/// exactly one square, which went from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}
