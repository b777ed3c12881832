//! Scripted play-through: a bound plus a list of yes/no tokens.

use crackers_core::{Answer, GameError, RangeBound, StageController};
use derive_more::{Display, From};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Error from a scripted play-through.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum HarnessError {
    /// A token was not yes/no.
    #[display("Invalid answer '{}' (expected yes/y or no/n)", _0)]
    #[from(ignore)]
    InvalidToken(String),

    /// The number of answers does not match the number of cards.
    #[display("Expected {} answers, got {}", expected, got)]
    #[from(ignore)]
    AnswerCount {
        /// Cards in the range.
        expected: u32,
        /// Answers supplied.
        got: usize,
    },

    /// The game rejected a transition.
    #[display("{}", _0)]
    Game(GameError),
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Game(e) => Some(e),
            HarnessError::InvalidToken(_) | HarnessError::AnswerCount { .. } => None,
        }
    }
}

/// Parses answer tokens (`yes`, `y`, `no`, `n`; any case).
#[instrument(skip(tokens))]
pub fn parse_answers<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Answer>, HarnessError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref().trim();
            Answer::from_str(token).map_err(|_| {
                warn!(token, "Unrecognised answer token");
                HarnessError::InvalidToken(token.to_string())
            })
        })
        .collect()
}

/// Plays a full round with the given answers and returns the reconstructed number.
#[instrument(skip(answers), fields(bits = %bound, answers = answers.len()))]
pub fn solve(bound: RangeBound, answers: &[Answer]) -> Result<u64, HarnessError> {
    if answers.len() != bound.bits() as usize {
        return Err(HarnessError::AnswerCount {
            expected: bound.bits(),
            got: answers.len(),
        });
    }

    let mut controller = StageController::new(bound);
    controller.start()?;
    for answer in answers {
        debug!(stage = controller.state().stage(), %answer, "Answering card");
        controller.answer(*answer)?;
    }

    controller
        .state()
        .reconstructed()
        .ok_or_else(|| HarnessError::AnswerCount {
            expected: bound.bits(),
            got: answers.len(),
        })
}

/// Parses tokens and solves in one step.
pub fn solve_tokens<S: AsRef<str>>(bound: RangeBound, tokens: &[S]) -> Result<u64, HarnessError> {
    let answers = parse_answers(tokens)?;
    solve(bound, &answers)
}
