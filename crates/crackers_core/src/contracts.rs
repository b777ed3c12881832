//! Contract-based validation for stage transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, trigger)} dispatch {Q(before, after)}`.

use super::action::{GameError, Trigger};
use super::cards::place_value;
use super::phases::Phase;
use super::types::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the incoming state satisfies every invariant.
pub struct StateConsistent;

impl StateConsistent {
    /// Validates the state record.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), GameError> {
        state.validate()
    }
}

/// Precondition: the trigger is defined for the current phase.
pub struct TriggerAccepted;

impl TriggerAccepted {
    /// Rejects triggers the current phase does not define.
    #[instrument(skip(state))]
    pub fn check(trigger: Trigger, state: &GameState) -> Result<(), GameError> {
        let phase = state.phase();
        if phase.accepts(trigger) {
            Ok(())
        } else {
            warn!(%trigger, %phase, "Trigger rejected");
            Err(GameError::InvalidTrigger { trigger, phase })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a forward step moves exactly one stage and adds at most
/// one place value. A step back to welcome clears the guess.
pub struct SingleStep;

impl SingleStep {
    /// Checks the step from `before` to `after`.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        if after.phase() == Phase::Welcome {
            return after.guess() == 0;
        }

        let added = after.guess().checked_sub(before.guess());
        after.stage() == before.stage() + 1
            && matches!(added, Some(delta) if delta == 0 || delta == place_value(before.stage()))
    }
}

// ─────────────────────────────────────────────────────────────
//  Trigger Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for trigger dispatch.
///
/// Preconditions:
/// - State satisfies the invariant set
/// - Trigger is defined for the phase
///
/// Postconditions:
/// - State still satisfies the invariant set
/// - Stage advanced by one and guess grew by zero or one place value,
///   or the game returned to welcome with a cleared guess
pub struct TriggerContract;

impl Contract<GameState, Trigger> for TriggerContract {
    fn pre(state: &GameState, trigger: &Trigger) -> Result<(), GameError> {
        StateConsistent::check(state)?;
        TriggerAccepted::check(*trigger, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        after
            .validate()
            .map_err(|e| GameError::InvariantViolation(format!("Postcondition failed: {}", e)))?;

        if SingleStep::holds(before, after) {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: stage {} -> {} with guess {} -> {} is not a single step",
                before.stage(),
                after.stage(),
                before.guess(),
                after.guess()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeBound, dispatch};

    #[test]
    fn test_precondition_start_from_welcome() {
        let state = GameState::default();
        assert!(TriggerContract::pre(&state, &Trigger::Start).is_ok());
    }

    #[test]
    fn test_precondition_answer_in_welcome() {
        let state = GameState::default();
        assert!(matches!(
            TriggerContract::pre(&state, &Trigger::AnswerYes),
            Err(GameError::InvalidTrigger {
                phase: Phase::Welcome,
                ..
            })
        ));
    }

    #[test]
    fn test_precondition_rejects_corrupt_state() {
        let mut state = GameState::default();
        state.guess = 5;
        assert!(matches!(
            TriggerContract::pre(&state, &Trigger::Start),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_answer() {
        let before = dispatch(GameState::default(), Trigger::Start).unwrap();
        let after = dispatch(before, Trigger::AnswerYes).unwrap();
        assert!(TriggerContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_skipped_stage() {
        let before = dispatch(GameState::new(RangeBound::new(4).unwrap()), Trigger::Start).unwrap();
        let mut after = dispatch(before, Trigger::AnswerNo).unwrap();
        after.stage += 1;
        assert!(TriggerContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_wrong_place_value() {
        let before = dispatch(GameState::default(), Trigger::Start).unwrap();
        let before = dispatch(before, Trigger::AnswerNo).unwrap();
        let mut after = dispatch(before, Trigger::AnswerNo).unwrap();
        // Stage 2 contributes 2, never 1.
        after.guess = 1;
        assert!(TriggerContract::post(&before, &after).is_err());
    }
}
