//! Pure transition function over [`GameState`] records.
//!
//! Adapters call [`dispatch`] with the record they were handed and store the
//! record they get back. Nothing here holds state between calls.

use super::action::{Answer, GameError, Trigger};
use super::contracts::{Contract, TriggerContract};
use super::phases::{Phase, RestartTarget};
use super::typestate::AnyPhase;
use super::types::{GameState, RangeBound};
use tracing::{info, instrument, warn};

/// Applies a trigger; restarts keep the current range.
#[instrument]
pub fn dispatch(state: GameState, trigger: Trigger) -> Result<GameState, GameError> {
    dispatch_with(state, trigger, RestartTarget::default())
}

/// Applies a trigger, returning the next state record.
///
/// Contract enforcement:
/// - Preconditions checked always
/// - Postconditions checked in debug builds only
#[instrument]
pub fn dispatch_with(
    state: GameState,
    trigger: Trigger,
    restart: RestartTarget,
) -> Result<GameState, GameError> {
    TriggerContract::pre(&state, &trigger)?;

    let next: GameState = match (AnyPhase::from(state), trigger) {
        (AnyPhase::Welcome(welcome), Trigger::Start) => welcome.start().into(),
        (AnyPhase::Questioning(q), Trigger::AnswerYes) => q.answer(Answer::Yes).into(),
        (AnyPhase::Questioning(q), Trigger::AnswerNo) => q.answer(Answer::No).into(),
        (AnyPhase::Questioning(q), Trigger::Restart) => q.restart(restart).into(),
        (AnyPhase::Reveal(r), Trigger::Restart) => r.restart(restart).into(),
        (phase, trigger) => {
            return Err(GameError::InvalidTrigger {
                trigger,
                phase: phase.phase(),
            });
        }
    };

    #[cfg(debug_assertions)]
    TriggerContract::post(&state, &next)?;

    info!(
        stage = next.stage(),
        guess = next.guess(),
        phase = %next.phase(),
        "Transition applied"
    );
    Ok(next)
}

/// Changes the range before play begins.
#[instrument]
pub fn choose_range(state: GameState, bound: RangeBound) -> Result<GameState, GameError> {
    state.validate()?;
    match AnyPhase::from(state) {
        AnyPhase::Welcome(welcome) => Ok(welcome.choose_range(bound).into()),
        other => {
            let phase = other.phase();
            warn!(%phase, "Range change rejected");
            Err(GameError::RangeLocked(phase))
        }
    }
}

/// Plays a whole round for a known secret, returning the final state.
///
/// Useful for demonstrations: answers each card the way a player holding
/// `secret` would.
#[instrument]
pub fn play_through(bound: RangeBound, secret: u64) -> Result<GameState, GameError> {
    let mut state = dispatch(GameState::new(bound), Trigger::Start)?;
    while state.phase() == Phase::Questioning {
        let answer = Answer::for_secret(secret, state.stage());
        state = dispatch(state, answer.into())?;
    }
    Ok(state)
}
