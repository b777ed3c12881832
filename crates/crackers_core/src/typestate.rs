//! Phase-specific typestate structs for Crackers.
//!
//! Each phase is its own type with only the fields that make sense for it.
//! A `Reveal` always carries a final guess, and a `Welcome` never carries a
//! guess at all.

use super::action::Answer;
use super::cards::{generate, place_value};
use super::phases::{Phase, RestartTarget};
use super::types::{GameState, RangeBound};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Welcome Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting to start. The range can still change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome {
    bound: RangeBound,
}

impl Welcome {
    /// Creates a welcome phase for the given range.
    pub fn new(bound: RangeBound) -> Self {
        Self { bound }
    }

    /// Returns the range in play.
    pub fn bound(&self) -> RangeBound {
        self.bound
    }

    /// Replaces the range before play begins.
    #[instrument(skip(self))]
    pub fn choose_range(self, bound: RangeBound) -> Self {
        debug!(from = %self.bound, to = %bound, "Range chosen");
        Self { bound }
    }

    /// Starts the first question (consumes welcome, returns questioning).
    #[instrument(skip(self), fields(bits = %self.bound))]
    pub fn start(self) -> Questioning {
        info!("Play-through started");
        Questioning {
            bound: self.bound,
            stage: 1,
            guess: 0,
        }
    }
}

impl Default for Welcome {
    fn default() -> Self {
        Self::new(RangeBound::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  Questioning Phase
// ─────────────────────────────────────────────────────────────

/// Game asking about card `stage`.
///
/// Invariants enforced by construction:
/// - `1 <= stage <= bits`
/// - `guess < 2^(stage-1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Questioning {
    bound: RangeBound,
    stage: u32,
    guess: u64,
}

impl Questioning {
    /// Returns the current stage (1-based).
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Returns the guess accumulated so far.
    pub fn guess(&self) -> u64 {
        self.guess
    }

    /// Returns the range in play.
    pub fn bound(&self) -> RangeBound {
        self.bound
    }

    /// Returns the card for the current stage.
    pub fn card(&self) -> Vec<u64> {
        generate(self.stage, self.bound)
    }

    /// Records an answer, consuming self and moving to the next stage.
    ///
    /// Returns the reveal phase after the last card.
    #[instrument(skip(self), fields(stage = self.stage, guess = self.guess))]
    pub fn answer(self, answer: Answer) -> Progress {
        let guess = match answer {
            Answer::Yes => self.guess + place_value(self.stage),
            Answer::No => self.guess,
        };
        let stage = self.stage + 1;

        if stage > self.bound.bits() {
            info!(guess, "All cards answered");
            Progress::Reveal(Reveal {
                bound: self.bound,
                guess,
            })
        } else {
            debug!(stage, guess, "Next card");
            Progress::Questioning(Questioning {
                bound: self.bound,
                stage,
                guess,
            })
        }
    }

    /// Abandons the play-through.
    #[instrument(skip(self))]
    pub fn restart(self, target: RestartTarget) -> Welcome {
        info!(stage = self.stage, "Restarted mid-game");
        Welcome::new(target.apply(self.bound))
    }
}

// ─────────────────────────────────────────────────────────────
//  Reveal Phase
// ─────────────────────────────────────────────────────────────

/// Every card answered; the guess is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    bound: RangeBound,
    guess: u64,
}

impl Reveal {
    /// Returns the reconstructed number.
    pub fn guess(&self) -> u64 {
        self.guess
    }

    /// Returns the range that was played.
    pub fn bound(&self) -> RangeBound {
        self.bound
    }

    /// Starts over (consumes reveal, returns welcome).
    #[instrument(skip(self))]
    pub fn restart(self, target: RestartTarget) -> Welcome {
        Welcome::new(target.apply(self.bound))
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Result of answering a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More cards to go.
    Questioning(Questioning),
    /// Last card answered.
    Reveal(Reveal),
}

/// Any phase, for code that holds a runtime [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyPhase {
    /// Waiting to start.
    Welcome(Welcome),
    /// Asking questions.
    Questioning(Questioning),
    /// Showing the result.
    Reveal(Reveal),
}

impl AnyPhase {
    /// Returns the phase tag.
    pub fn phase(&self) -> Phase {
        match self {
            AnyPhase::Welcome(_) => Phase::Welcome,
            AnyPhase::Questioning(_) => Phase::Questioning,
            AnyPhase::Reveal(_) => Phase::Reveal,
        }
    }
}

impl From<GameState> for AnyPhase {
    fn from(state: GameState) -> Self {
        let bound = state.bound();
        match state.phase() {
            Phase::Welcome => AnyPhase::Welcome(Welcome::new(bound)),
            Phase::Questioning => AnyPhase::Questioning(Questioning {
                bound,
                stage: state.stage(),
                guess: state.guess(),
            }),
            Phase::Reveal => AnyPhase::Reveal(Reveal {
                bound,
                guess: state.guess(),
            }),
        }
    }
}

impl From<Welcome> for GameState {
    fn from(welcome: Welcome) -> Self {
        GameState::new(welcome.bound)
    }
}

impl From<Questioning> for GameState {
    fn from(questioning: Questioning) -> Self {
        GameState {
            stage: questioning.stage,
            guess: questioning.guess,
            bound: questioning.bound,
        }
    }
}

impl From<Reveal> for GameState {
    fn from(reveal: Reveal) -> Self {
        GameState {
            stage: reveal.bound.bits() + 1,
            guess: reveal.guess,
            bound: reveal.bound,
        }
    }
}

impl From<Progress> for GameState {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::Questioning(q) => q.into(),
            Progress::Reveal(r) => r.into(),
        }
    }
}

impl From<AnyPhase> for GameState {
    fn from(phase: AnyPhase) -> Self {
        match phase {
            AnyPhase::Welcome(w) => w.into(),
            AnyPhase::Questioning(q) => q.into(),
            AnyPhase::Reveal(r) => r.into(),
        }
    }
}
