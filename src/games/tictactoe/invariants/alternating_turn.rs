//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Move, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added at step `k` belongs to the player whose turn it was at
/// step `k - 1`, so the first mark is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(mov) => mov.player == Player::for_step(step),
                // Malformed steps are reported by MonotonicBoardInvariant.
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
