//! Number-set generator: the numbers printed on each card.
//!
//! Card `n` lists every number in range whose bit `n - 1` is set, so a player
//! who says "yes" to card `n` contributes the place value `2^(n-1)`.

use super::phases::Phase;
use super::types::{GameState, RangeBound};
use tracing::{debug, instrument};

/// Place value contributed by a "yes" at `stage` (`2^(stage-1)`).
///
/// Stage 0 has no card and contributes nothing.
pub fn place_value(stage: u32) -> u64 {
    match stage.checked_sub(1) {
        Some(bit) if bit < u64::BITS => 1u64 << bit,
        _ => 0,
    }
}

/// Generates card `n` for the given range, in ascending order.
///
/// The card holds every `i` with `2^(n-1) <= i < 2^bits` and bit `n - 1` set.
/// Zero never appears. A stage of 0 or beyond the bound yields an empty card.
#[instrument]
pub fn generate(n: u32, bound: RangeBound) -> Vec<u64> {
    if n == 0 || n > bound.bits() {
        debug!(n, bits = bound.bits(), "Stage has no card");
        return Vec::new();
    }

    let bit = place_value(n);
    let limit = 1u64 << bound.bits();
    (bit..limit).filter(|i| i & bit != 0).collect()
}

/// Number of cards (and questions) for the range.
pub fn card_count(bound: RangeBound) -> u32 {
    bound.bits()
}

/// Generates every card for the range, card 1 first.
#[instrument]
pub fn all_cards(bound: RangeBound) -> Vec<Vec<u64>> {
    (1..=card_count(bound)).map(|n| generate(n, bound)).collect()
}

/// Returns the card shown for the state's current stage.
///
/// Empty outside the questioning phase.
pub fn card_for(state: &GameState) -> Vec<u64> {
    match state.phase() {
        Phase::Questioning => generate(state.stage(), state.bound()),
        Phase::Welcome | Phase::Reveal => Vec::new(),
    }
}
