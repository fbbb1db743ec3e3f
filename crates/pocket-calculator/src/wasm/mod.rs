//! Browser front end for the calculator
//!
//! The mock DOM lets the page logic run under `cargo test`; the real
//! `web-sys` bindings sit behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
