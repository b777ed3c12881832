//! Crackers game logic - the binary "mind-reading" trick.
//!
//! A player picks a number between 1 and `2^bits - 1` and answers one yes/no
//! question per card. Card `n` shows the numbers with bit `n - 1` set, so the
//! sum of the place values of every "yes" card is the picked number.
//!
//! # Architecture
//!
//! - **Cards**: [`generate`] builds the number list for a stage
//! - **State**: [`GameState`] is an explicit, serializable record
//! - **Rules**: [`dispatch`] is a pure `(state, trigger) -> state` function
//! - **Typestate**: [`Welcome`] → [`Questioning`] → [`Reveal`]
//! - **Contracts**: pre/postconditions and [`Invariant`]s checked per step
//!
//! # Example
//!
//! ```
//! use crackers_core::{RangeBound, StageController};
//!
//! let mut game = StageController::new(RangeBound::new(3)?);
//! game.start()?;
//! game.answer_yes()?; // 1 is on card 1
//! game.answer_no()?;
//! game.answer_yes()?; // 4 is on card 3
//! assert_eq!(game.state().reconstructed(), Some(5));
//! # Ok::<(), crackers_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cards;
mod contracts;
mod controller;
mod invariants;
mod phases;
mod rules;
mod typestate;
mod types;

pub use action::{Answer, GameError, Trigger};
pub use cards::{all_cards, card_count, card_for, generate, place_value};
pub use contracts::{Contract, SingleStep, StateConsistent, TriggerAccepted, TriggerContract};
pub use controller::StageController;
pub use invariants::{
    BoundSupportedInvariant, GameStateInvariants, GuessWithinAnsweredInvariant, Invariant,
    InvariantSet, InvariantViolation, StageInRangeInvariant,
};
pub use phases::{Phase, RestartPolicy, RestartTarget};
pub use rules::{choose_range, dispatch, dispatch_with, play_through};
pub use typestate::{AnyPhase, Progress, Questioning, Reveal, Welcome};
pub use types::{GameState, RangeBound};
