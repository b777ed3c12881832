//! Bound invariant: the range fits the supported span.

use super::Invariant;
use crate::{GameState, RangeBound};

/// Invariant: `1 <= bits <= RangeBound::MAX_BITS`.
pub struct BoundSupportedInvariant;

impl Invariant<GameState> for BoundSupportedInvariant {
    fn holds(state: &GameState) -> bool {
        (1..=RangeBound::MAX_BITS).contains(&state.bound().bits())
    }

    fn description() -> &'static str {
        "Range bound is within the supported span"
    }
}
