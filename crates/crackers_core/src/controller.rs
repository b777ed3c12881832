//! Owning wrapper around [`dispatch_with`] for single-session adapters.

use super::action::{Answer, GameError, Trigger};
use super::cards::card_for;
use super::phases::{Phase, RestartTarget};
use super::rules::{choose_range, dispatch_with};
use super::types::{GameState, RangeBound};
use tracing::instrument;

/// Stage controller for one play-through.
///
/// Holds the current [`GameState`] and where restarts land. Each trigger
/// method returns the updated state; a rejected trigger leaves the state
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageController {
    state: GameState,
    restart: RestartTarget,
}

impl StageController {
    /// Creates a controller in the welcome phase.
    pub fn new(bound: RangeBound) -> Self {
        Self {
            state: GameState::new(bound),
            restart: RestartTarget::default(),
        }
    }

    /// Sets the restart policy and the range a reset returns to.
    pub fn with_restart(mut self, restart: RestartTarget) -> Self {
        self.restart = restart;
        self
    }

    /// Resumes a play-through from a record handed back by a collaborator.
    #[instrument]
    pub fn resume(state: GameState, restart: RestartTarget) -> Result<Self, GameError> {
        state.validate()?;
        Ok(Self { state, restart })
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns where restarts land.
    pub fn restart_target(&self) -> RestartTarget {
        self.restart
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the card for the current stage (empty outside questioning).
    pub fn card(&self) -> Vec<u64> {
        card_for(&self.state)
    }

    /// Applies any trigger.
    #[instrument(skip(self), fields(stage = self.state.stage()))]
    pub fn dispatch(&mut self, trigger: Trigger) -> Result<GameState, GameError> {
        self.state = dispatch_with(self.state, trigger, self.restart)?;
        Ok(self.state)
    }

    /// Starts the play-through.
    pub fn start(&mut self) -> Result<GameState, GameError> {
        self.dispatch(Trigger::Start)
    }

    /// Answers "yes" to the current card.
    pub fn answer_yes(&mut self) -> Result<GameState, GameError> {
        self.dispatch(Trigger::AnswerYes)
    }

    /// Answers "no" to the current card.
    pub fn answer_no(&mut self) -> Result<GameState, GameError> {
        self.dispatch(Trigger::AnswerNo)
    }

    /// Answers the current card.
    pub fn answer(&mut self, answer: Answer) -> Result<GameState, GameError> {
        self.dispatch(answer.into())
    }

    /// Returns to the welcome phase.
    pub fn restart(&mut self) -> Result<GameState, GameError> {
        self.dispatch(Trigger::Restart)
    }

    /// Changes the range; only valid before the first question.
    #[instrument(skip(self))]
    pub fn choose_range(&mut self, bound: RangeBound) -> Result<GameState, GameError> {
        self.state = choose_range(self.state, bound)?;
        Ok(self.state)
    }

    /// Consumes the controller, returning the state for storage.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
