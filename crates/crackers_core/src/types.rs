//! Core domain types for Crackers.

use super::action::GameError;
use super::invariants::{GameStateInvariants, InvariantSet};
use super::phases::Phase;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of yes/no questions in a play-through (`maxN`).
///
/// A bound of `n` covers the numbers `1..=2^n - 1`, so a bound of 6 plays
/// with the numbers 1 to 63.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u32", into = "u32")]
#[display("{}", _0)]
pub struct RangeBound(u32);

impl RangeBound {
    /// Largest supported bound. Every number in range fits a `u64`.
    pub const MAX_BITS: u32 = 32;

    /// Bounds offered to players: upper limits 15, 31, 63 and 127.
    pub const ALLOWED: [u32; 4] = [4, 5, 6, 7];

    /// Default bound (numbers 1 to 63).
    pub const DEFAULT_BITS: u32 = 6;

    /// Creates a bound, rejecting values outside `1..=MAX_BITS`.
    #[instrument]
    pub fn new(bits: u32) -> Result<Self, GameError> {
        if (1..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            warn!(bits, "Range bound outside supported span");
            Err(GameError::InvalidRangeBound(bits))
        }
    }

    /// Creates a bound that must also be a member of `allowed`.
    #[instrument]
    pub fn from_allowed(bits: u32, allowed: &[u32]) -> Result<Self, GameError> {
        if !allowed.contains(&bits) {
            warn!(bits, ?allowed, "Range bound not in allowed set");
            return Err(GameError::InvalidRangeBound(bits));
        }
        Self::new(bits)
    }

    /// Number of questions asked with this bound.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Largest number a player may pick (`2^bits - 1`).
    pub fn upper_limit(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Returns true if `number` can be picked under this bound.
    pub fn contains(self, number: u64) -> bool {
        (1..=self.upper_limit()).contains(&number)
    }
}

impl Default for RangeBound {
    fn default() -> Self {
        Self(Self::DEFAULT_BITS)
    }
}

impl TryFrom<u32> for RangeBound {
    type Error = GameError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<RangeBound> for u32 {
    fn from(bound: RangeBound) -> Self {
        bound.0
    }
}

/// Explicit state record for one play-through.
///
/// Adapters hold on to this between interactions and hand it back on each
/// call. The record is `Copy`; transitions return a new record instead of
/// mutating shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Question index: 0 before start, `1..=bits` while asking, `bits + 1` at reveal.
    pub(crate) stage: u32,
    /// Sum of place values for every "yes" so far.
    pub(crate) guess: u64,
    /// Range in play.
    pub(crate) bound: RangeBound,
}

impl GameState {
    /// Creates a fresh state in the welcome phase.
    pub fn new(bound: RangeBound) -> Self {
        Self {
            stage: 0,
            guess: 0,
            bound,
        }
    }

    /// Returns the current stage.
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Returns the accumulated guess.
    pub fn guess(&self) -> u64 {
        self.guess
    }

    /// Returns the range bound.
    pub fn bound(&self) -> RangeBound {
        self.bound
    }

    /// Returns the phase implied by the stage counter.
    pub fn phase(&self) -> Phase {
        if self.stage == 0 {
            Phase::Welcome
        } else if self.stage <= self.bound.bits() {
            Phase::Questioning
        } else {
            Phase::Reveal
        }
    }

    /// Number of questions already answered.
    pub fn answered(&self) -> u32 {
        self.stage.saturating_sub(1).min(self.bound.bits())
    }

    /// Returns the reconstructed number once every question has been answered.
    pub fn reconstructed(&self) -> Option<u64> {
        match self.phase() {
            Phase::Reveal => Some(self.guess),
            Phase::Welcome | Phase::Questioning => None,
        }
    }

    /// Checks a record received from outside against the game invariants.
    #[instrument]
    pub fn validate(&self) -> Result<(), GameError> {
        GameStateInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected game state");
            GameError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RangeBound::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_limits() {
        assert!(RangeBound::new(0).is_err());
        assert!(RangeBound::new(1).is_ok());
        assert!(RangeBound::new(RangeBound::MAX_BITS).is_ok());
        assert!(RangeBound::new(RangeBound::MAX_BITS + 1).is_err());
    }

    #[test]
    fn test_allowed_set_enforced() {
        assert!(RangeBound::from_allowed(7, &RangeBound::ALLOWED).is_ok());
        assert_eq!(
            RangeBound::from_allowed(3, &RangeBound::ALLOWED),
            Err(GameError::InvalidRangeBound(3))
        );
    }

    #[test]
    fn test_upper_limits() {
        let limits: Vec<u64> = RangeBound::ALLOWED
            .iter()
            .map(|&bits| RangeBound::new(bits).unwrap().upper_limit())
            .collect();
        assert_eq!(limits, vec![15, 31, 63, 127]);
        assert_eq!(RangeBound::default().upper_limit(), 63);
    }

    #[test]
    fn test_contains_excludes_zero() {
        let bound = RangeBound::new(3).unwrap();
        assert!(!bound.contains(0));
        assert!(bound.contains(1));
        assert!(bound.contains(7));
        assert!(!bound.contains(8));
    }

    #[test]
    fn test_phase_from_stage() {
        let bound = RangeBound::new(2).unwrap();
        let mut state = GameState::new(bound);
        assert_eq!(state.phase(), Phase::Welcome);
        state.stage = 1;
        assert_eq!(state.phase(), Phase::Questioning);
        state.stage = 2;
        assert_eq!(state.phase(), Phase::Questioning);
        state.stage = 3;
        assert_eq!(state.phase(), Phase::Reveal);
    }

    #[test]
    fn test_bound_deserialize_rejects_zero() {
        let result: Result<RangeBound, _> = serde_json::from_str("0");
        assert!(result.is_err());
        let bound: RangeBound = serde_json::from_str("5").unwrap();
        assert_eq!(bound.bits(), 5);
    }
}
