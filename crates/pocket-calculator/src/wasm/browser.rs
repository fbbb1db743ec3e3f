//! Browser bindings for the calculator page
//!
//! The page owns the event listeners; it forwards `KeyboardEvent.key` to
//! [`BrowserCalculator::handle_key`] and button clicks to
//! [`BrowserCalculator::press_button`]. The calculator writes straight into
//! the display `<input>`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlInputElement};

use crate::session::{CalculatorSession, DisplaySink};
use crate::wasm::keypad::WasmKeypad;

/// Display sink backed by a real `<input>` element
#[derive(Debug)]
struct InputDisplay {
    element: HtmlInputElement,
}

impl DisplaySink for InputDisplay {
    fn render(&mut self, text: &str) {
        self.element.set_value(text);
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    session: CalculatorSession<InputDisplay>,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds a calculator to the `<input>` with id `display_id`
    #[wasm_bindgen(constructor)]
    pub fn new(display_id: &str) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let element = document
            .get_element_by_id(display_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{display_id}'")))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("display element is not an <input>"))?;

        Ok(Self {
            session: CalculatorSession::new(InputDisplay { element }),
            keypad: WasmKeypad::new(),
        })
    }

    /// Handles a keyboard key; returns false for keys the calculator ignores
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.session.handle_key(key)
    }

    /// Handles a keypad button click by element ID
    pub fn press_button(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(token) => {
                self.session.submit(token);
                true
            }
            None => false,
        }
    }

    /// Clears the calculator
    pub fn clear(&mut self) {
        self.session.reset();
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.session.display().to_string()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator loaded".into());
}
