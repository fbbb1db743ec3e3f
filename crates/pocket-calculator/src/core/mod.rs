//! Core calculator module
//!
//! Everything in here is pure: no I/O, no host types. Front ends feed
//! [`Token`]s through [`engine::submit_token`] and render the resulting
//! display text.

pub mod engine;
pub mod number;
mod operations;
mod state;
mod token;

pub use engine::Transition;
pub use operations::{Calculator, Operation};
pub use state::{CalculatorState, PendingOperation};
pub use token::Token;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failures. The `Display` text is exactly what the keypad shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand did not parse as a number
    #[error("Erro")]
    InvalidNumber,
    /// Right operand of a division was zero
    #[error("Erro: Divisão por zero")]
    DivisionByZero,
}
