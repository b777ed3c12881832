//! First-class invariants for Crackers game states.
//!
//! Invariants are logical properties every [`GameState`](crate::GameState)
//! must satisfy. Adapters run them over records handed back from outside, and
//! the transition contracts re-check them after every step in debug builds.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant, carrying its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation for the named invariant.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked in one pass.
///
/// Implemented for tuples of up to four invariants so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks every invariant in the group and reports all that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($inv::holds(state), $inv::description()),)+
                ]
                .into_iter()
                .filter(|(held, _)| !held)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

pub mod bound_supported;
pub mod guess_within_answered;
pub mod stage_in_range;

pub use bound_supported::BoundSupportedInvariant;
pub use guess_within_answered::GuessWithinAnsweredInvariant;
pub use stage_in_range::StageInRangeInvariant;

/// All game-state invariants as a composable set.
pub type GameStateInvariants = (
    StageInRangeInvariant,
    GuessWithinAnsweredInvariant,
    BoundSupportedInvariant,
);
