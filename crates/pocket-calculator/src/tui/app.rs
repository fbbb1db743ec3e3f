//! TUI Application State

use crossterm::event::KeyEvent;

use super::input::{InputHandler, KeyAction};
use crate::session::{BufferedDisplay, CalculatorSession};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    session: CalculatorSession<BufferedDisplay>,
    input: InputHandler,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: CalculatorSession::default(),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Handles one key press
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        match self.input.handle_key(event) {
            KeyAction::Submit(token) => {
                self.session.submit(token);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Text on the calculator display
    #[must_use]
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// The underlying calculator session
    #[must_use]
    pub fn session(&self) -> &CalculatorSession<BufferedDisplay> {
        &self.session
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
