//! Application state and key handling.

use crate::config::CrackersConfig;
use crate::render::CardLayout;
use crackers_core::{GameError, Phase, RangeBound, StageController, Trigger};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// Main application state.
pub struct App {
    controller: StageController,
    allowed: Vec<RangeBound>,
    layout: CardLayout,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application at the welcome screen.
    #[instrument(skip(config))]
    pub fn new(config: &CrackersConfig, bound: RangeBound) -> Result<Self, GameError> {
        let mut app = Self {
            controller: StageController::new(bound).with_restart(config.restart_target()?),
            allowed: config.allowed_bounds(),
            layout: CardLayout::new(*config.columns()),
            status_message: String::new(),
            should_quit: false,
        };
        app.refresh_status();
        Ok(app)
    }

    /// Returns the stage controller.
    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    /// Returns the ranges the player can pick from.
    pub fn allowed(&self) -> &[RangeBound] {
        &self.allowed
    }

    /// Returns the card layout.
    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let phase = self.controller.phase();
        match (phase, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => self.should_quit = true,
            (Phase::Welcome, KeyCode::Left) => self.cycle_range(false),
            (Phase::Welcome, KeyCode::Right) => self.cycle_range(true),
            (Phase::Welcome, KeyCode::Enter | KeyCode::Char('s')) => self.apply(Trigger::Start),
            (Phase::Questioning, KeyCode::Char('y')) => self.apply(Trigger::AnswerYes),
            (Phase::Questioning, KeyCode::Char('n')) => self.apply(Trigger::AnswerNo),
            (Phase::Questioning | Phase::Reveal, KeyCode::Char('r')) => {
                self.apply(Trigger::Restart)
            }
            _ => debug!(?key, %phase, "Key ignored"),
        }
    }

    fn apply(&mut self, trigger: Trigger) {
        match self.controller.dispatch(trigger) {
            Ok(_) => self.refresh_status(),
            Err(e) => {
                warn!(error = %e, "Trigger rejected");
                self.status_message = e.to_string();
            }
        }
    }

    fn cycle_range(&mut self, forward: bool) {
        if self.allowed.is_empty() {
            return;
        }
        let current = self.controller.state().bound();
        let index = self.allowed.iter().position(|b| *b == current).unwrap_or(0);
        let len = self.allowed.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };

        match self.controller.choose_range(self.allowed[next]) {
            Ok(_) => self.refresh_status(),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn refresh_status(&mut self) {
        let state = self.controller.state();
        self.status_message = match state.phase() {
            Phase::Welcome => {
                "←/→ choose range · Enter to start · q to quit".to_string()
            }
            Phase::Questioning => format!(
                "Card {} of {} · y = yes · n = no · r = start again",
                state.stage(),
                state.bound().bits()
            ),
            Phase::Reveal => "r to play again · q to quit".to_string(),
        };
    }
}
