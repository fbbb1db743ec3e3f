//! Non-interactive replay of key presses

use std::io::Write;

use serde::Serialize;
use tracing::warn;

use super::config::{CliConfig, OutputFormat};
use super::error::CliResult;
use crate::core::{CalculatorState, Token};
use crate::session::CalculatorSession;

/// Display and state after one accepted key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Key name as pressed
    pub key: String,
    /// Display text after the key
    pub display: String,
    /// False when the key changed nothing and the display was not redrawn
    pub rendered: bool,
    /// Calculator state after the key
    pub state: CalculatorState,
}

/// Splits arguments into individual key names
///
/// Named keys (`Enter`, `Escape`, `Backspace`) stay whole; runs of keypad
/// characters such as `12.5` become one key per character. Anything else is
/// passed through unchanged so it can be reported.
#[must_use]
pub fn expand_keys<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            let arg = arg.as_ref();
            let splittable = arg.chars().count() > 1
                && Token::from_key(arg).is_none()
                && arg.chars().all(|ch| Token::from_char(ch).is_some());
            if splittable {
                arg.chars().map(String::from).collect::<Vec<_>>()
            } else {
                vec![arg.to_string()]
            }
        })
        .collect()
}

/// Presses each key on a fresh session, skipping keys the calculator ignores
pub fn replay_keys<S: AsRef<str>>(keys: &[S]) -> Vec<ReplayStep> {
    let mut session = CalculatorSession::default();
    let mut steps = Vec::with_capacity(keys.len());
    for key in keys {
        let key = key.as_ref();
        let Some(token) = Token::from_key(key) else {
            warn!(key, "skipping unrecognized key");
            continue;
        };
        let transition = session.submit(token);
        steps.push(ReplayStep {
            key: key.to_string(),
            display: session.display().to_string(),
            rendered: !transition.is_noop(),
            state: session.state().clone(),
        });
    }
    steps
}

/// Writes replay output in the configured format
///
/// Text mode prints the final display, or every rendered display when the
/// transcript is enabled. JSON mode always prints the full step list.
pub fn write_replay<W: Write>(
    steps: &[ReplayStep],
    config: &CliConfig,
    out: &mut W,
) -> CliResult<()> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, steps)?;
            writeln!(out)?;
        }
        OutputFormat::Text if config.transcript => {
            for step in steps.iter().filter(|step| step.rendered) {
                writeln!(out, "{}\t{}", step.key, step.display)?;
            }
        }
        OutputFormat::Text => {
            let last = steps.last().map_or("", |step| step.display.as_str());
            writeln!(out, "{last}")?;
        }
    }
    Ok(())
}

/// Runs the `replay` command against stdout
pub fn run_replay(keys: &[String], config: &CliConfig) -> CliResult<()> {
    let steps = replay_keys(&expand_keys(keys));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_replay(&steps, config, &mut out)
}
