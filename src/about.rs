//! About text and player instructions.

use crackers_core::RangeBound;

/// Background on the activity, its origins, and where to read more.
pub const ABOUT: &str = "\
About Crackers

Origins

Crackers comes from a task described by YouCubed
(https://www.youcubed.org/tasks/crackers/) and introduced by Cathy Williams
(https://www.linkedin.com/in/youcubedwilliams/). It is meant as a \"low floor,
high ceiling\" mathematics learning task
(https://djplaner.github.io/memex/sense/Teaching/low-floor-high-ceiling-wide-walls/).
The name comes from Cathy's memories of a prize found in a Cracker Jack box.

This version of the game was built to:

  1. Experiment with building a small interactive program around the trick.
  2. Possibly use in a classroom introducing binary data representation
     (https://djplaner.github.io/memex/sense/Teaching/Mathematics/crackers/#re-purposing-as-an-activity-for-teaching-digital-technologies).

Each card lists the numbers that have one particular binary digit set. Saying
\"yes\" to a card adds that digit's place value (1, 2, 4, 8, ...) to the
answer, so the cards quietly rebuild your number in binary.

For more

  - Crackers on GitHub: https://github.com/djplaner/crackers
  - YouCubed's description of Crackers, including suggested questions to frame
    student engagement with the task: https://www.youcubed.org/tasks/crackers/";

/// Returns the three-step instructions for a range.
pub fn instructions(bound: RangeBound) -> String {
    format!(
        "1. Pick any number between 1 and {} - but don't tell me!\n\
         2. Answer {} simple questions.\n\
         3. I will read your mind and tell you what number you picked.",
        bound.upper_limit(),
        bound.bits()
    )
}

/// Headline shown above each card.
pub const CARD_QUESTION: &str = "Is your number on this card?";

/// Returns the reveal line for a reconstructed number.
pub fn reveal(guess: u64) -> String {
    format!("Is {} your number?", guess)
}
