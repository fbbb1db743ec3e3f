//! Calculator session - state plus a display
//!
//! A session owns the [`CalculatorState`] and pushes every display change to
//! a [`DisplaySink`]. Hosts only ever call [`CalculatorSession::submit`] or
//! [`CalculatorSession::handle_key`].

use tracing::info;

use crate::core::engine::{self, Transition};
use crate::core::{CalculatorState, Token};

/// Where display text goes (input element, terminal line, test buffer)
pub trait DisplaySink {
    /// Replaces the displayed text
    fn render(&mut self, text: &str);
}

/// Sink that keeps the latest text and every render in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedDisplay {
    text: String,
    transcript: Vec<String>,
}

impl BufferedDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every rendered text, oldest first
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl DisplaySink for BufferedDisplay {
    fn render(&mut self, text: &str) {
        self.text = text.to_string();
        self.transcript.push(self.text.clone());
    }
}

/// A running calculator bound to a display
#[derive(Debug)]
pub struct CalculatorSession<S: DisplaySink> {
    state: CalculatorState,
    sink: S,
    display: String,
}

impl Default for CalculatorSession<BufferedDisplay> {
    fn default() -> Self {
        Self::new(BufferedDisplay::new())
    }
}

impl<S: DisplaySink> CalculatorSession<S> {
    /// Starts a session, blanking the display
    pub fn new(mut sink: S) -> Self {
        sink.render("");
        info!("calculator loaded");
        Self {
            state: CalculatorState::default(),
            sink,
            display: String::new(),
        }
    }

    /// Feeds one token through the engine and renders the result
    pub fn submit(&mut self, token: Token) -> Transition {
        let transition = engine::submit_token(&self.state, token);
        if let Some(text) = &transition.display {
            self.sink.render(text);
            self.display.clone_from(text);
        }
        self.state.clone_from(&transition.state);
        transition
    }

    /// Maps a key name to a token and submits it
    ///
    /// Returns false (and does nothing) for keys the calculator ignores.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Token::from_key(key) {
            Some(token) => {
                self.submit(token);
                true
            }
            None => false,
        }
    }

    /// Clears state and display
    pub fn reset(&mut self) {
        self.submit(Token::Clear);
    }

    /// Text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The display sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the display sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
