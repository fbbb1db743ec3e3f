//! On-screen keypad for the browser page
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ / ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```

use super::dom::{DomElement, MockDom};
use crate::core::{Operation, Token};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// Token submitted when the button is clicked
    pub token: Token,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        let id = match token {
            Token::Digit(d) => format!("btn-{d}"),
            Token::Point => "btn-decimal".to_string(),
            Token::Operator(op) => format!("btn-{}", op_name(op)),
            Token::Equals => "btn-equals".to_string(),
            Token::Clear => "btn-clear".to_string(),
            Token::Backspace => "btn-backspace".to_string(),
        };
        Self {
            token,
            id,
            row,
            col,
        }
    }

    /// Button caption
    #[must_use]
    pub fn label(&self) -> String {
        match self.token {
            Token::Clear => "C".to_string(),
            Token::Backspace => "⌫".to_string(),
            Token::Equals => "=".to_string(),
            other => other.key_name(),
        }
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Keypad layout definition
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let grid: [&[Token]; 5] = [
            &[
                Token::Clear,
                Token::Backspace,
                Token::Operator(Operation::Divide),
                Token::Operator(Operation::Multiply),
            ],
            &[
                Token::Digit(7),
                Token::Digit(8),
                Token::Digit(9),
                Token::Operator(Operation::Subtract),
            ],
            &[
                Token::Digit(4),
                Token::Digit(5),
                Token::Digit(6),
                Token::Operator(Operation::Add),
            ],
            &[Token::Digit(1), Token::Digit(2), Token::Digit(3), Token::Equals],
            &[Token::Digit(0), Token::Point],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, tokens)| {
                tokens
                    .iter()
                    .enumerate()
                    .map(move |(col, token)| KeypadButtonDef::new(*token, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: grid.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that submits `token`
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.token == token)
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr("data-key", &btn.token.key_name())
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements()
            .into_iter()
            .fold(
                DomElement::new("div").with_id("keypad").with_class("keypad"),
                DomElement::with_child,
            )
    }

    /// Processes a button click and returns the token to submit
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Token> {
        self.find_button_by_id(element_id).map(|btn| btn.token)
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds keypad to an existing calculator DOM
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        let keypad_elem = keypad.create_keypad_element();
        for btn_elem in &keypad_elem.children {
            self.register_element(btn_elem.clone());
        }
        self.root.children.push(keypad_elem.clone());
        self.register_element(keypad_elem);
    }
}
