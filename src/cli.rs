//! Command-line interface for crackers.

use clap::{Parser, Subcommand};
use crackers::{CardFormat, Trigger};
use std::path::PathBuf;

/// Crackers - the binary mind-reading trick
#[derive(Parser, Debug)]
#[command(name = "crackers")]
#[command(about = "Guess a secret number from yes/no answers about binary cards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $CRACKERS_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Number of cards (range 1 to 2^max_n - 1); configured default if omitted
        #[arg(short = 'n', long)]
        max_n: Option<u32>,
    },

    /// Reconstruct a number from a list of yes/no answers
    Solve {
        /// Number of cards (range 1 to 2^max_n - 1)
        #[arg(short = 'n', long)]
        max_n: Option<u32>,

        /// One answer per card, card 1 first (yes/y/no/n)
        #[arg(required = true, num_args = 1..)]
        answers: Vec<String>,
    },

    /// Print every card for a range
    Cards {
        /// Number of cards (range 1 to 2^max_n - 1)
        #[arg(short = 'n', long)]
        max_n: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = CardFormat::Plain)]
        format: CardFormat,
    },

    /// Apply one trigger to a game state and print the next state as JSON
    Step {
        /// State JSON from a previous step; a fresh game if omitted
        #[arg(short, long)]
        state: Option<String>,

        /// Trigger: start, yes, no, or restart
        trigger: Trigger,
    },

    /// Run the HTTP front end
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show where the trick comes from and how to play
    About,
}
