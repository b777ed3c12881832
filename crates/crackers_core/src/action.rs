//! Triggers that drive the stage controller, and the errors they can raise.
//!
//! Triggers are plain values: they can be parsed from user input, carried in a
//! request body, and checked against the current phase before anything runs.

use super::phases::Phase;
use serde::{Deserialize, Serialize};

/// An input to the stage controller.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Trigger {
    /// Begin the first question.
    #[strum(to_string = "start")]
    Start,
    /// "Yes, my number is on this card."
    #[serde(alias = "yes")]
    #[strum(to_string = "yes", serialize = "y", serialize = "answer_yes")]
    AnswerYes,
    /// "No, my number is not on this card."
    #[serde(alias = "no")]
    #[strum(to_string = "no", serialize = "n", serialize = "answer_no")]
    AnswerNo,
    /// Abandon the play-through and return to the welcome phase.
    #[strum(to_string = "restart")]
    Restart,
}

/// Answer to a single card.
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
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Answer {
    /// The number is on the card.
    #[strum(to_string = "yes", serialize = "y")]
    Yes,
    /// The number is not on the card.
    #[strum(to_string = "no", serialize = "n")]
    No,
}

impl Answer {
    /// Builds the answer a player holding `secret` gives at `stage`.
    pub fn for_secret(secret: u64, stage: u32) -> Self {
        match stage.checked_sub(1) {
            Some(bit) if bit < u64::BITS && secret & (1u64 << bit) != 0 => Answer::Yes,
            _ => Answer::No,
        }
    }
}

impl From<Answer> for Trigger {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => Trigger::AnswerYes,
            Answer::No => Trigger::AnswerNo,
        }
    }
}

impl From<bool> for Answer {
    fn from(on_card: bool) -> Self {
        if on_card { Answer::Yes } else { Answer::No }
    }
}

/// Error raised by a rejected transition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The range bound is unsupported or not in the allowed set.
    #[display("Range bound {} is not allowed", _0)]
    InvalidRangeBound(u32),

    /// The trigger is not defined for the current phase.
    #[display("Trigger '{}' is not valid during the {} phase", trigger, phase)]
    InvalidTrigger {
        /// The rejected trigger.
        trigger: Trigger,
        /// Phase the game was in.
        phase: Phase,
    },

    /// The range can only be chosen before the first question.
    #[display("Range cannot change during the {} phase", _0)]
    RangeLocked(Phase),

    /// A state record broke an invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_trigger_parse_aliases() {
        assert_eq!(Trigger::from_str("Y"), Ok(Trigger::AnswerYes));
        assert_eq!(Trigger::from_str("yes"), Ok(Trigger::AnswerYes));
        assert_eq!(Trigger::from_str("NO"), Ok(Trigger::AnswerNo));
        assert_eq!(Trigger::from_str("restart"), Ok(Trigger::Restart));
        assert!(Trigger::from_str("maybe").is_err());
    }

    #[test]
    fn test_trigger_display_is_short_form() {
        assert_eq!(Trigger::AnswerYes.to_string(), "yes");
        assert_eq!(Trigger::Start.to_string(), "start");
    }

    #[test]
    fn test_trigger_serde_accepts_short_alias() {
        let trigger: Trigger = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(trigger, Trigger::AnswerYes);
        let trigger: Trigger = serde_json::from_str("\"answer_no\"").unwrap();
        assert_eq!(trigger, Trigger::AnswerNo);
    }

    #[test]
    fn test_answer_for_secret() {
        // 37 = 0b100101
        let answers: Vec<Answer> = (1..=6).map(|stage| Answer::for_secret(37, stage)).collect();
        assert_eq!(
            answers,
            vec![
                Answer::Yes,
                Answer::No,
                Answer::Yes,
                Answer::No,
                Answer::No,
                Answer::Yes
            ]
        );
        assert_eq!(Answer::for_secret(37, 0), Answer::No);
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidTrigger {
            trigger: Trigger::AnswerYes,
            phase: Phase::Welcome,
        };
        assert_eq!(
            err.to_string(),
            "Trigger 'yes' is not valid during the welcome phase"
        );
    }
}
