//! Input tokens
//!
//! Every front end (keyboard, keypad buttons, terminal, replay) reduces its
//! input to a [`Token`] before touching the engine.

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// A single unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// Binary operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Delete the last character (or cancel the pending operator)
    Backspace,
}

impl Token {
    /// Maps a keyboard key name to a token
    ///
    /// Accepts the browser `KeyboardEvent.key` names: `"0"`-`"9"`, `"."`,
    /// `"+"`, `"-"`, `"*"`, `"/"`, `"Enter"`, `"="`, `"Escape"` and
    /// `"Backspace"`. Anything else is `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Maps a single typed character to a token
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }

    /// The key name that produces this token
    #[must_use]
    pub fn key_name(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "Enter".to_string(),
            Self::Clear => "Escape".to_string(),
            Self::Backspace => "Backspace".to_string(),
        }
    }

    /// Character appended to the current entry, for digits and the point
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(Token::from_key(&d.to_string()), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_from_key_point() {
        assert_eq!(Token::from_key("."), Some(Token::Point));
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(Token::from_key("+"), Some(Token::Operator(Operation::Add)));
        assert_eq!(
            Token::from_key("-"),
            Some(Token::Operator(Operation::Subtract))
        );
        assert_eq!(
            Token::from_key("*"),
            Some(Token::Operator(Operation::Multiply))
        );
        assert_eq!(
            Token::from_key("/"),
            Some(Token::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_from_key_commands() {
        assert_eq!(Token::from_key("Enter"), Some(Token::Equals));
        assert_eq!(Token::from_key("="), Some(Token::Equals));
        assert_eq!(Token::from_key("Escape"), Some(Token::Clear));
        assert_eq!(Token::from_key("Backspace"), Some(Token::Backspace));
    }

    #[test]
    fn test_from_key_unrecognized() {
        for key in ["a", "Tab", "F1", "12", "", "^", "%", "(", "Delete", "x"] {
            assert_eq!(Token::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_key_name_roundtrip() {
        let tokens = [
            Token::Digit(0),
            Token::Digit(9),
            Token::Point,
            Token::Operator(Operation::Divide),
            Token::Equals,
            Token::Clear,
            Token::Backspace,
        ];
        for token in tokens {
            assert_eq!(Token::from_key(&token.key_name()), Some(token));
        }
    }

    #[test]
    fn test_entry_char() {
        assert_eq!(Token::Digit(7).entry_char(), Some('7'));
        assert_eq!(Token::Point.entry_char(), Some('.'));
        assert_eq!(Token::Equals.entry_char(), None);
        assert_eq!(Token::Operator(Operation::Add).entry_char(), None);
    }

    #[test]
    fn test_token_serde() {
        let json = serde_json::to_string(&Token::Digit(4)).unwrap();
        assert_eq!(json, r#"{"digit":4}"#);
        let token: Token = serde_json::from_str(r#""backspace""#).unwrap();
        assert_eq!(token, Token::Backspace);
    }
}
