//! Pocket Calculator - keypad calculator engine with terminal and browser
//! front ends
//!
//! The engine in [`core`] is a set of pure transitions over
//! [`CalculatorState`](core::CalculatorState). A [`CalculatorSession`]
//! feeds keys through it and pushes display text to a
//! [`DisplaySink`](session::DisplaySink): a terminal box, a browser
//! `<input>`, or an in-memory buffer.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut session = CalculatorSession::default();
//! for key in ["1", "/", "3", "Enter"] {
//!     session.handle_key(key);
//! }
//! assert_eq!(session.display(), "0.33333333");
//!
//! // Errors reset the calculator
//! for key in ["8", "/", "0", "Enter"] {
//!     session.handle_key(key);
//! }
//! assert_eq!(session.display(), "Erro: Divisão por zero");
//! assert!(session.state().is_empty());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod core;
pub mod driver;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end - the mock DOM is always available for testing
pub mod wasm;

pub use session::CalculatorSession;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::engine::{evaluate, submit_token};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, Operation, Token, Transition,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::session::{BufferedDisplay, CalculatorSession, DisplaySink};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{MockDom, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut session = CalculatorSession::default();
        assert!(session.handle_key("5"));
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_calculator_direct() {
        assert_eq!(
            Calculator::calculate(6.0, 7.0, Operation::Multiply).unwrap(),
            42.0
        );
        assert_eq!(
            Calculator::calculate(1.0, 0.0, Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_pure_transitions() {
        let state = [Token::Digit(2), Token::Operator(Operation::Add), Token::Digit(2)]
            .into_iter()
            .fold(CalculatorState::new(), |state, token| {
                submit_token(&state, token).state
            });
        let done = evaluate(&state);
        assert_eq!(done.display.as_deref(), Some("4"));
        assert!(evaluate(&done.state).is_noop());
    }

    #[test]
    fn test_front_ends_agree() {
        let keys = ["9", "-", "1", "2", ".", "5", "Enter"];
        let mut browser = WasmDriver::new();
        browser.press_keys(&keys);
        assert_eq!(browser.display(), "-3.5");

        #[cfg(feature = "tui")]
        {
            let mut terminal = TuiDriver::new();
            terminal.press_keys(&keys);
            assert_eq!(terminal.display(), browser.display());
            assert_eq!(terminal.state(), browser.state());
        }
    }
}
