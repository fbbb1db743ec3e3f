//! Unified Calculator Driver
//!
//! Write the behavioural checks once, run them against every front end.
//! The terminal app and the mock browser page both implement
//! [`CalculatorDriver`]; the `verify_*` functions below only talk to the
//! trait.

use crate::core::{CalculatorState, Operation};

/// Front-end agnostic interface for calculator interactions
///
/// # Example
///
/// ```rust,ignore
/// fn check<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_keys(&["3", "+", "4", "Enter"]);
///     assert_eq!(driver.display(), "7");
/// }
/// ```
pub trait CalculatorDriver {
    /// Presses a key by its browser key name (`"7"`, `"+"`, `"Enter"`, ...)
    fn press_key(&mut self, key: &str);

    /// Text currently on the display
    fn display(&self) -> String;

    /// Current calculator state
    fn state(&self) -> &CalculatorState;

    /// Presses several keys in order
    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.press_key(key);
        }
    }

    /// Clears the calculator
    fn clear(&mut self) {
        self.press_key("Escape");
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::core::CalculatorState;
    use crate::tui::CalculatorApp;

    /// Drives the terminal app with synthetic crossterm key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn key_code(key: &str) -> Option<KeyCode> {
            match key {
                "Enter" => Some(KeyCode::Enter),
                "Escape" => Some(KeyCode::Esc),
                "Backspace" => Some(KeyCode::Backspace),
                _ => {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(KeyCode::Char(c)),
                        _ => None,
                    }
                }
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_key(&mut self, key: &str) {
            if let Some(code) = Self::key_code(key) {
                self.app
                    .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn state(&self) -> &CalculatorState {
            self.app.session().state()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["3", "+", "4", "Enter"]);
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.press_keys(&["1", "0", "-", "4", "="]);
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.press_keys(&["6", "*", "7", "Enter"]);
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.press_keys(&["2", "0", "/", "4", "Enter"]);
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// Verifies digit entry and the single decimal point rule
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["1", ".", "5", ".", "2"]);
    assert_eq!(driver.display(), "1.52");
    assert_eq!(driver.state().current_entry, "1.52");
    driver.clear();
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["5", "+", "3", "+"]);
    assert_eq!(driver.display(), "8 + ");
    driver.press_keys(&["2", "Enter"]);
    assert_eq!(driver.display(), "10");
    driver.clear();

    driver.press_keys(&["2", "+", "3", "*", "4", "Enter"]);
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies division by zero shows the error and resets
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["8", "/", "0", "Enter"]);
    assert_eq!(driver.display(), "Erro: Divisão por zero");
    assert!(driver.state().is_empty());

    // next digit starts a fresh entry
    driver.press_key("5");
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// Verifies a malformed operand shows the generic error
pub fn verify_invalid_number<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&[".", "+", "2", "Enter"]);
    assert_eq!(driver.display(), "Erro");
    assert!(driver.state().is_empty());
    driver.clear();
}

/// Verifies backspace editing and operator cancellation
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["1", "2", "3", "Backspace"]);
    assert_eq!(driver.display(), "12");
    driver.clear();

    driver.press_keys(&["9", "+", "Backspace"]);
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.state().pending_operator(), None::<Operation>);
    driver.clear();
}

/// Verifies results are rounded to 8 decimal places
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["1", "/", "3", "Enter"]);
    assert_eq!(driver.display(), "0.33333333");
    driver.clear();
}

/// Verifies clear blanks the display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["7", "*", "3"]);
    driver.clear();
    assert_eq!(driver.display(), "");
    assert!(driver.state().is_empty());
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_decimal_entry(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_invalid_number(driver);
    verify_backspace(driver);
    verify_rounding(driver);
    verify_clear(driver);
}
