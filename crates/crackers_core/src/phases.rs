//! Game phases and restart policy.

use super::action::Trigger;
use super::types::RangeBound;
use serde::{Deserialize, Serialize};

/// Phase of a play-through, derived from the stage counter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Not started (stage 0). The range may still change.
    Welcome,
    /// Asking "is your number on this card?" (stage `1..=bits`).
    Questioning,
    /// Every question answered; the guess is final.
    Reveal,
}

impl Phase {
    /// Returns true if `trigger` is defined for this phase.
    pub fn accepts(self, trigger: Trigger) -> bool {
        matches!(
            (self, trigger),
            (Phase::Welcome, Trigger::Start)
                | (
                    Phase::Questioning,
                    Trigger::AnswerYes | Trigger::AnswerNo | Trigger::Restart
                )
                | (Phase::Reveal, Trigger::Restart)
        )
    }

    /// Returns true once the play-through has started.
    pub fn is_active(self) -> bool {
        !matches!(self, Phase::Welcome)
    }
}

/// What happens to the range bound on restart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RestartPolicy {
    /// Keep the bound the player chose.
    #[default]
    Keep,
    /// Go back to the configured default bound.
    Reset,
}

impl RestartPolicy {
    /// Returns the bound to use after a restart from `bound`.
    pub fn apply(self, bound: RangeBound, default: RangeBound) -> RangeBound {
        match self {
            RestartPolicy::Keep => bound,
            RestartPolicy::Reset => default,
        }
    }
}

/// Where a restart lands: a policy paired with the configured default range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestartTarget {
    policy: RestartPolicy,
    default: RangeBound,
}

impl RestartTarget {
    /// Pairs a policy with the range `Reset` returns to.
    pub fn new(policy: RestartPolicy, default: RangeBound) -> Self {
        Self { policy, default }
    }

    /// Returns the policy.
    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    /// Returns the range a reset returns to.
    pub fn default_bound(&self) -> RangeBound {
        self.default
    }

    /// Returns the bound to use after a restart from `bound`.
    pub fn apply(&self, bound: RangeBound) -> RangeBound {
        self.policy.apply(bound, self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_restart_accepted_outside_welcome() {
        for phase in Phase::iter() {
            assert_eq!(phase.accepts(Trigger::Restart), phase.is_active());
        }
    }

    #[test]
    fn test_answers_only_while_questioning() {
        assert!(Phase::Questioning.accepts(Trigger::AnswerYes));
        assert!(!Phase::Welcome.accepts(Trigger::AnswerYes));
        assert!(!Phase::Reveal.accepts(Trigger::AnswerNo));
    }

    #[test]
    fn test_reset_policy_restores_given_default() {
        let bound = RangeBound::new(7).unwrap();
        let default = RangeBound::new(4).unwrap();
        assert_eq!(RestartPolicy::Keep.apply(bound, default), bound);
        assert_eq!(RestartPolicy::Reset.apply(bound, default), default);
    }

    #[test]
    fn test_restart_target_carries_default() {
        let default = RangeBound::new(5).unwrap();
        let target = RestartTarget::new(RestartPolicy::Reset, default);
        assert_eq!(target.apply(RangeBound::new(7).unwrap()), default);
        assert_eq!(RestartTarget::default().apply(default), default);
    }
}
