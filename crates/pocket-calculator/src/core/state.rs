//! Calculator accumulator state

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// Left operand captured together with the operator chosen after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Operand text as it was when the operator was chosen
    pub operand: String,
    /// The chosen operator
    pub operator: Operation,
}

/// Running two-operand expression
///
/// `pending` holds the left operand and operator once an operator key has
/// been pressed; `current_entry` is the operand being typed (or the text of
/// the last result).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand under construction
    pub current_entry: String,
    /// Pending left operand and operator
    pub pending: Option<PendingOperation>,
}

impl CalculatorState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_entry.is_empty() && self.pending.is_none()
    }

    /// Pending left operand, empty when no operation is pending
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    /// Pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Display text for the expression being built
    ///
    /// `"<operand> <op> <entry>"` while an operation is pending, otherwise
    /// the bare entry.
    #[must_use]
    pub fn expression_text(&self) -> String {
        match &self.pending {
            Some(pending) => format!(
                "{} {} {}",
                pending.operand, pending.operator, self.current_entry
            ),
            None => self.current_entry.clone(),
        }
    }
}
