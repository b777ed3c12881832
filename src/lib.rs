//! Crackers - the binary mind-reading trick
//!
//! A player picks a secret number and answers "is your number on this card?"
//! once per card. The cards are built from binary place values, so the yes
//! answers add up to the secret.
//!
//! # Architecture
//!
//! - **Core**: pure game logic from [`crackers_core`] (cards, state record, dispatch)
//! - **Config**: TOML configuration shared by every front end
//! - **Harness**: scripted play-through from yes/no tokens
//! - **Server**: stateless HTTP front end, state travels with each request
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use crackers::{CrackersConfig, solve_tokens};
//!
//! let config = CrackersConfig::default();
//! let bound = config.resolve_bound(Some(6))?;
//! let secret = solve_tokens(bound, &["yes", "no", "yes", "no", "no", "yes"])?;
//! assert_eq!(secret, 37);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod about;
mod config;
mod harness;
mod render;
mod server;
mod tui;

// Crate-level exports - Text
pub use about::{ABOUT, CARD_QUESTION, instructions, reveal};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, CrackersConfig};

// Crate-level exports - Scripted play
pub use harness::{HarnessError, parse_answers, solve, solve_tokens};

// Crate-level exports - Card layout
pub use render::{CardFormat, CardLayout};

// Crate-level exports - HTTP front end
pub use server::{
    ApiError, AppState, CardQuery, DispatchRequest, RangeRequest, View, router, serve,
};

// Crate-level exports - Terminal front end
pub use tui::run_tui;

// Crate-level exports - Game types
pub use crackers_core::{
    AnyPhase, Answer, GameError, GameState, Phase, Progress, Questioning, RangeBound,
    RestartPolicy, RestartTarget, Reveal, StageController, Trigger, Welcome, all_cards,
    card_count, card_for, choose_range, dispatch, dispatch_with, generate, place_value,
    play_through,
};
