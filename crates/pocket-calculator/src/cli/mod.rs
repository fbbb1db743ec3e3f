//! Command-line front end
//!
//! `pocket-calculator` with no arguments opens the terminal calculator;
//! `pocket-calculator replay 3 + 4 Enter` prints `7`.

mod commands;
mod config;
mod error;
#[cfg(feature = "tui")]
mod interactive;
mod replay;

pub use commands::{Cli, Commands, FormatArg, ReplayArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
#[cfg(feature = "tui")]
pub use interactive::run_interactive;
pub use replay::{expand_keys, replay_keys, run_replay, write_replay, ReplayStep};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`.
/// Logs go to stderr so they never mix with replay output.
pub fn init_tracing(verbosity: Verbosity) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Dispatches a parsed command line
pub fn run(cli: &Cli) -> CliResult<()> {
    let config = cli.config();
    match &cli.command {
        Some(Commands::Replay(args)) => run_replay(&args.keys, &config),
        Some(Commands::Run) | None => run_terminal(),
    }
}

#[cfg(feature = "tui")]
fn run_terminal() -> CliResult<()> {
    run_interactive()
}

#[cfg(not(feature = "tui"))]
fn run_terminal() -> CliResult<()> {
    Err(CliError::unsupported(
        "interactive mode requires the `tui` feature",
    ))
}
