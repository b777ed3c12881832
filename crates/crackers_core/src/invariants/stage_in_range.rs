//! Stage invariant: the counter never runs past the reveal marker.

use super::Invariant;
use crate::GameState;

/// Invariant: `stage <= bits + 1`.
pub struct StageInRangeInvariant;

impl Invariant<GameState> for StageInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.stage() <= state.bound().bits() + 1
    }

    fn description() -> &'static str {
        "Stage never exceeds the reveal stage"
    }
}
