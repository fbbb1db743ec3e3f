//! Interactive terminal session

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;

use super::error::CliResult;
use crate::tui::{render, CalculatorApp};

/// Terminal mode switches needed by the interactive calculator
pub trait TerminalModes {
    /// Turns raw mode on
    fn enable_raw(&mut self) -> io::Result<()>;
    /// Turns raw mode off
    fn disable_raw(&mut self) -> io::Result<()>;
    /// Switches to the alternate screen and hides the cursor
    fn enter_screen(&mut self) -> io::Result<()>;
    /// Shows the cursor and leaves the alternate screen
    fn leave_screen(&mut self) -> io::Result<()>;
}

impl<T: TerminalModes + ?Sized> TerminalModes for &mut T {
    fn enable_raw(&mut self) -> io::Result<()> {
        (**self).enable_raw()
    }

    fn disable_raw(&mut self) -> io::Result<()> {
        (**self).disable_raw()
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        (**self).enter_screen()
    }

    fn leave_screen(&mut self) -> io::Result<()> {
        (**self).leave_screen()
    }
}

/// The real terminal on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTerminal;

impl TerminalModes for StdoutTerminal {
    fn enable_raw(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, Hide)
    }

    fn leave_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Show, LeaveAlternateScreen)
    }
}

/// Undoes whatever terminal setup succeeded, on `restore` or on drop
#[derive(Debug)]
pub struct TerminalGuard<T: TerminalModes> {
    terminal: T,
    raw: bool,
    screen: bool,
}

impl<T: TerminalModes> TerminalGuard<T> {
    /// Enables raw mode and the alternate screen
    ///
    /// If a step fails, the steps already taken are undone before the error
    /// is returned.
    pub fn enter(terminal: T) -> io::Result<Self> {
        let mut guard = Self {
            terminal,
            raw: false,
            screen: false,
        };
        guard.terminal.enable_raw()?;
        guard.raw = true;
        guard.terminal.enter_screen()?;
        guard.screen = true;
        Ok(guard)
    }

    /// Restores the terminal, attempting every step and returning the first
    /// error
    pub fn restore(&mut self) -> io::Result<()> {
        let mut first_error = None;
        if self.raw {
            self.raw = false;
            if let Err(e) = self.terminal.disable_raw() {
                first_error.get_or_insert(e);
            }
        }
        if self.screen {
            self.screen = false;
            if let Err(e) = self.terminal.leave_screen() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// The wrapped terminal
    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}

impl<T: TerminalModes> Drop for TerminalGuard<T> {
    fn drop(&mut self) {
        // errors here have nowhere to go
        let _ = self.restore();
    }
}

/// Runs the terminal calculator until the user quits
///
/// The terminal is restored on every exit path. An event-loop error takes
/// precedence over a restore error.
pub fn run_interactive() -> CliResult<()> {
    let mut guard = TerminalGuard::enter(StdoutTerminal)?;

    let mut app = CalculatorApp::new();
    let result = event_loop(&mut app, &mut io::stdout());
    let restored = guard.restore();
    info!(display = app.display(), "calculator closed");

    result?;
    restored?;
    Ok(())
}

fn event_loop<W: Write>(app: &mut CalculatorApp, out: &mut W) -> CliResult<()> {
    while !app.should_quit() {
        render(app, out)?;
        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }
    }
    Ok(())
}
