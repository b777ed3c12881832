//! Crackers - Unified CLI
//!
//! Terminal, HTTP, and scripted front ends for the binary mind-reading trick.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use crackers::{
    ABOUT, CardFormat, CardLayout, CrackersConfig, GameState, RangeBound, Trigger, View,
    all_cards, dispatch_with, instructions, run_tui, serve, solve_tokens,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file used while the terminal UI owns the screen.
const TUI_LOG_FILE: &str = "crackers_tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.command)?;

    let config =
        CrackersConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play { max_n } => run_play(&config, max_n),
        Command::Solve { max_n, answers } => run_solve(&config, max_n, &answers),
        Command::Cards { max_n, format } => run_cards(&config, max_n, format),
        Command::Step { state, trigger } => run_step(&config, state.as_deref(), trigger),
        Command::Serve { port, host } => serve(&host, port, config).await,
        Command::About => run_about(&config),
    }
}

/// Logs go to stderr, except in the TUI where they go to a file.
fn init_tracing(command: &Command) -> Result<()> {
    let default_level = match command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if matches!(command, Command::Play { .. }) {
        let log_file = std::fs::File::create(TUI_LOG_FILE)
            .with_context(|| format!("Failed to create {}", TUI_LOG_FILE))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

/// Run the terminal UI
fn run_play(config: &CrackersConfig, max_n: Option<u32>) -> Result<()> {
    let bound = config.resolve_bound(max_n)?;
    run_tui(config, bound)
}

/// Reconstruct a number from answer tokens
#[instrument(skip(config, answers))]
fn run_solve(config: &CrackersConfig, max_n: Option<u32>, answers: &[String]) -> Result<()> {
    let bound = config.resolve_bound(max_n)?;
    let secret = solve_tokens(bound, answers)?;
    info!(secret, "Solved");
    println!("{}", secret);
    Ok(())
}

/// Print all cards for a range
#[instrument(skip(config))]
fn run_cards(config: &CrackersConfig, max_n: Option<u32>, format: CardFormat) -> Result<()> {
    let bound = config.resolve_bound(max_n)?;
    let layout = CardLayout::new(*config.columns());

    for (index, card) in all_cards(bound).iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Card {}:", index + 1);
        println!("{}", layout.render(card, format));
    }
    Ok(())
}

/// Apply one trigger to a handed-in state
#[instrument(skip(config))]
fn run_step(config: &CrackersConfig, state: Option<&str>, trigger: Trigger) -> Result<()> {
    let state = match state {
        Some(json) => {
            let state: GameState =
                serde_json::from_str(json).context("State is not a valid game state")?;
            RangeBound::from_allowed(state.bound().bits(), config.allowed_max_n())?;
            state
        }
        None => GameState::new(config.default_bound()?),
    };
    debug!(?state, %trigger, "Applying trigger");

    let next = dispatch_with(state, trigger, config.restart_target()?)?;
    println!("{}", serde_json::to_string(&View::from(next))?);
    Ok(())
}

/// Print the about text
fn run_about(config: &CrackersConfig) -> Result<()> {
    println!("{}", ABOUT);
    println!();
    println!("{}", instructions(config.default_bound()?));
    Ok(())
}
