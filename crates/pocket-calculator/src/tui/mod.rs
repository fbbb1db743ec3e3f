//! Terminal front end for the calculator

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{display_line, render, DISPLAY_WIDTH, HELP_LINE, KEYPAD_ROWS};
