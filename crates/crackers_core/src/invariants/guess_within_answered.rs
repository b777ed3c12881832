//! Guess invariant: only answered cards contribute to the guess.

use super::Invariant;
use crate::GameState;

/// Invariant: `guess < 2^answered`.
///
/// Each answered card can add at most its own place value, so after `k`
/// answers the guess fits in `k` bits. A welcome state always has guess 0.
pub struct GuessWithinAnsweredInvariant;

impl Invariant<GameState> for GuessWithinAnsweredInvariant {
    fn holds(state: &GameState) -> bool {
        let answered = state.answered();
        answered >= u64::BITS || state.guess() >> answered == 0
    }

    fn description() -> &'static str {
        "Guess only includes place values of answered cards"
    }
}
