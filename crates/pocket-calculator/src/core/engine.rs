//! Token dispatch
//!
//! Each operation takes the current [`CalculatorState`] by reference and
//! returns a [`Transition`]: the next state plus the text to render. A
//! transition with no display text is a no-op and the host leaves its
//! display untouched.
//!
//! Evaluation is strictly left to right. Choosing an operator while another
//! one is pending evaluates the pending one first; there is no precedence.

use tracing::{debug, warn};

use crate::core::number::{format_number, parse_operand};
use crate::core::{
    CalcError, CalcResult, Calculator, CalculatorState, Operation, PendingOperation, Token,
};

/// Outcome of feeding one token to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the token
    pub state: CalculatorState,
    /// Text to render, `None` when nothing changed
    pub display: Option<String>,
    /// Evaluation error that reset the state, if any
    pub error: Option<CalcError>,
}

impl Transition {
    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            display: None,
            error: None,
        }
    }

    fn render(state: CalculatorState, display: String) -> Self {
        Self {
            state,
            display: Some(display),
            error: None,
        }
    }

    fn failed(error: CalcError) -> Self {
        warn!(%error, "evaluation failed, resetting calculator");
        Self {
            state: CalculatorState::default(),
            display: Some(error.to_string()),
            error: Some(error),
        }
    }

    /// Returns true when the token changed nothing
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.display.is_none()
    }
}

/// Single entry point used by every front end
pub fn submit_token(state: &CalculatorState, token: Token) -> Transition {
    let transition = match token {
        Token::Operator(op) => submit_operator(state, op),
        Token::Digit(_) | Token::Point => match token.entry_char() {
            Some(ch) => submit_digit_or_point(state, ch),
            None => Transition::unchanged(state),
        },
        Token::Equals => evaluate(state),
        Token::Clear => clear(),
        Token::Backspace => delete_last(state),
    };

    debug!(
        ?token,
        display = transition.display.as_deref(),
        entry = %transition.state.current_entry,
        "token submitted"
    );
    transition
}

/// Captures the current entry as the left operand of `op`
///
/// Ignored while the entry is empty. A pending operation is evaluated
/// first and its result becomes the new left operand. If that evaluation
/// fails the state is reset and `op` is still captured, with an empty left
/// operand, so the display reads `" <op> "` and `error` carries the failure.
pub fn submit_operator(state: &CalculatorState, op: Operation) -> Transition {
    if state.current_entry.is_empty() {
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    let mut error = None;
    if next.pending.is_some() {
        let evaluated = evaluate(&next);
        error = evaluated.error;
        next = evaluated.state;
    }

    let operand = std::mem::take(&mut next.current_entry);
    next.pending = Some(PendingOperation {
        operand,
        operator: op,
    });
    let display = next.expression_text();
    Transition {
        error,
        ..Transition::render(next, display)
    }
}

/// Appends a digit or the decimal point to the current entry
///
/// A second point is dropped, as is anything that is not a digit or point.
pub fn submit_digit_or_point(state: &CalculatorState, ch: char) -> Transition {
    let accepted = ch.is_ascii_digit() || (ch == '.' && !state.current_entry.contains('.'));
    if !accepted {
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    next.current_entry.push(ch);
    let display = next.expression_text();
    Transition::render(next, display)
}

/// Evaluates the pending operation against the current entry
///
/// No-op unless an operator, its left operand and a right operand are all
/// present. On success the formatted result becomes the current entry.
pub fn evaluate(state: &CalculatorState) -> Transition {
    let Some(pending) = &state.pending else {
        return Transition::unchanged(state);
    };
    if pending.operand.is_empty() || state.current_entry.is_empty() {
        return Transition::unchanged(state);
    }

    match compute(&pending.operand, pending.operator, &state.current_entry) {
        Ok(value) => {
            let text = format_number(value);
            let next = CalculatorState {
                current_entry: text.clone(),
                pending: None,
            };
            Transition::render(next, text)
        }
        Err(error) => Transition::failed(error),
    }
}

/// Resets everything and blanks the display
pub fn clear() -> Transition {
    Transition::render(CalculatorState::default(), String::new())
}

/// Deletes the last typed character, or cancels a just-chosen operator
///
/// With an empty entry and a pending operator, the operator is dropped and
/// the left operand becomes the current entry again.
pub fn delete_last(state: &CalculatorState) -> Transition {
    if !state.current_entry.is_empty() {
        let mut next = state.clone();
        next.current_entry.pop();
        let display = next.expression_text();
        return Transition::render(next, display);
    }

    match &state.pending {
        Some(pending) => {
            let next = CalculatorState {
                current_entry: pending.operand.clone(),
                pending: None,
            };
            let display = next.current_entry.clone();
            Transition::render(next, display)
        }
        None => Transition::unchanged(state),
    }
}

fn compute(left: &str, op: Operation, right: &str) -> CalcResult<f64> {
    let a = parse_operand(left).ok_or(CalcError::InvalidNumber)?;
    let b = parse_operand(right).ok_or(CalcError::InvalidNumber)?;
    Calculator::calculate(a, b, op)
}
