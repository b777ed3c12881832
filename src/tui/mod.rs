//! Terminal UI for Crackers.

mod app;
mod ui;

use app::App;

use crate::config::CrackersConfig;
use anyhow::Result;
use crackers_core::RangeBound;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the interactive game until the player quits.
#[instrument(skip(config), fields(bits = %bound))]
pub fn run_tui(config: &CrackersConfig, bound: RangeBound) -> Result<()> {
    info!("Starting Crackers TUI");
    let app = App::new(config, bound)?;

    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), || Ok(disable_raw_mode()?))?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!("TUI closed");
    result
}

/// Switches to the alternate screen, leaving it again if the terminal cannot be built.
fn setup_terminal() -> Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(anyhow::Error::from);
    restore_on_error(terminal, || Ok(execute!(io::stdout(), LeaveAlternateScreen)?))
}

/// Runs `restore` when `result` is an error, keeping the original error.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    if result.is_err()
        && let Err(e) = restore()
    {
        warn!(error = %e, "Failed to restore terminal");
    }
    result
}

fn run_app(terminal: &mut CrosstermTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
