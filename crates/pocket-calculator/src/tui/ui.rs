//! TUI rendering with raw crossterm commands
//!
//! Draws a boxed display line above a keypad legend. Rendering goes to any
//! `Write`, so tests render into a `Vec<u8>`.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use super::app::CalculatorApp;

/// Inner width of the calculator box
pub const DISPLAY_WIDTH: usize = 24;

/// Keypad legend, one row per line
pub const KEYPAD_ROWS: [&str; 5] = [
    " C   ⌫   /   *",
    " 7   8   9   -",
    " 4   5   6   +",
    " 1   2   3   =",
    " 0   .",
];

/// Shortcut help line under the box
pub const HELP_LINE: &str = "Enter = | Esc clear | Backspace delete | q quit";

/// Renders the calculator UI
pub fn render<W: Write>(app: &CalculatorApp, out: &mut W) -> io::Result<()> {
    let horizontal = "─".repeat(DISPLAY_WIDTH + 2);
    let mut lines = Vec::with_capacity(KEYPAD_ROWS.len() + 5);

    lines.push(format!("┌{horizontal}┐"));
    lines.push(format!("│ {} │", display_line(app.display(), DISPLAY_WIDTH)));
    lines.push(format!("├{horizontal}┤"));
    for row in KEYPAD_ROWS {
        lines.push(format!("│ {} │", pad_right(row, DISPLAY_WIDTH)));
    }
    lines.push(format!("└{horizontal}┘"));
    lines.push(HELP_LINE.to_string());

    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

/// Right-aligns `text` in `width` columns, keeping the tail when too long
#[must_use]
pub fn display_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{}{text}", " ".repeat(width - len))
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn rendered(app: &CalculatorApp) -> String {
        let mut out = Vec::new();
        render(app, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_display_line_right_aligns() {
        assert_eq!(display_line("7", 4), "   7");
    }

    #[test]
    fn test_display_line_exact_width() {
        assert_eq!(display_line("1234", 4), "1234");
    }

    #[test]
    fn test_display_line_keeps_tail() {
        assert_eq!(display_line("123456", 4), "3456");
    }

    #[test]
    fn test_display_line_counts_chars_not_bytes() {
        let line = display_line("Erro: Divisão por zero", 24);
        assert_eq!(line.chars().count(), 24);
        assert!(line.ends_with("Divisão por zero"));
    }

    #[test]
    fn test_render_empty_app() {
        let output = rendered(&CalculatorApp::new());
        assert!(output.contains(HELP_LINE));
        for row in KEYPAD_ROWS {
            assert!(output.contains(row));
        }
    }

    #[test]
    fn test_render_shows_expression() {
        let mut app = CalculatorApp::new();
        for c in "9+4".chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(rendered(&app).contains("9 + 4 │"));
    }

    #[test]
    fn test_render_box_lines_have_equal_width() {
        let output = rendered(&CalculatorApp::new());
        let top = format!("┌{}┐", "─".repeat(DISPLAY_WIDTH + 2));
        assert!(output.contains(&top));
        assert_eq!(
            pad_right(KEYPAD_ROWS[4], DISPLAY_WIDTH).chars().count(),
            DISPLAY_WIDTH
        );
    }
}
