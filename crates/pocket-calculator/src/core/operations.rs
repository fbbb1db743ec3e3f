//! The four keypad operations
//!
//! Type-safe operation enum; division is the only fallible one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::number::round_result;
use crate::core::{CalcError, CalcResult};

/// Binary operation selectable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arithmetic for a single pending operation
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Applies `op` to the operands and rounds to 8 decimal places
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        let raw_result = match op {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => Self::divide(a, b)?,
        };
        Ok(round_result(raw_result))
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        // also true for -0.0
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}
