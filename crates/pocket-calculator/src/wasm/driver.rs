//! WASM Driver - the calculator page on a mock DOM
//!
//! Implements [`CalculatorDriver`] so the unified checks run against the
//! browser page exactly as they run against the terminal app.

use super::dom::{DomEvent, MockDom, DISPLAY_ID};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::core::{CalculatorState, Token};
use crate::driver::CalculatorDriver;
use crate::session::CalculatorSession;

/// Calculator session rendering into a mock page
#[derive(Debug)]
pub struct WasmDriver {
    session: CalculatorSession<MockDom>,
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates the calculator page with display and keypad
    #[must_use]
    pub fn new() -> Self {
        let keypad = WasmKeypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        Self {
            session: CalculatorSession::new(dom),
            keypad,
        }
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.session.sink()
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Simulates clicking an element; keypad buttons submit their token
    ///
    /// Returns false when the element is not a keypad button.
    pub fn click(&mut self, element_id: &str) -> bool {
        self.session
            .sink_mut()
            .dispatch_event(DomEvent::click(element_id));
        match self.keypad.handle_click(element_id) {
            Some(token) => {
                self.session.submit(token);
                true
            }
            None => false,
        }
    }

    /// Clicks the keypad button for `token`
    pub fn click_token(&mut self, token: Token) -> bool {
        match self.keypad.find_button_by_token(token) {
            Some(button) => {
                let id = button.id.clone();
                self.click(&id)
            }
            None => false,
        }
    }

    /// Simulates typing straight into the display element
    pub fn type_into_display(&mut self, text: &str) {
        self.session
            .sink_mut()
            .dispatch_event(DomEvent::input(DISPLAY_ID, text));
    }

    /// Value of the display element
    #[must_use]
    pub fn display_value(&self) -> &str {
        self.dom().get_value(DISPLAY_ID).unwrap_or_default()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) {
        self.session
            .sink_mut()
            .dispatch_event(DomEvent::key_down(key));
        self.session.handle_key(key);
    }

    fn display(&self) -> String {
        self.display_value().to_string()
    }

    fn state(&self) -> &CalculatorState {
        self.session.state()
    }
}
