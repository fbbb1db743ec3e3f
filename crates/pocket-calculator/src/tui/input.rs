//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator tokens. Keys the calculator
//! does not know are mapped to [`KeyAction::None`] and ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Token;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the calculator
    Submit(Token),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Token::from_char(c).map_or(KeyAction::None, KeyAction::Submit),
            KeyCode::Enter => KeyAction::Submit(Token::Equals),
            KeyCode::Esc => KeyAction::Submit(Token::Clear),
            KeyCode::Backspace => KeyAction::Submit(Token::Backspace),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let digit = c.to_digit(10).unwrap() as u8;
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Submit(Token::Digit(digit))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Submit(Token::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Submit(Token::Point)
        );
    }

    #[test]
    fn test_handle_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Submit(Token::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Submit(Token::Equals)
        );
    }

    #[test]
    fn test_handle_escape_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Submit(Token::Clear)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Submit(Token::Backspace)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('a'),
            KeyCode::Char('^'),
            KeyCode::Char('('),
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::Delete,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_ctrl_with_digit_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }
}
