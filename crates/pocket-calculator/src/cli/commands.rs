//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::config::{CliConfig, OutputFormat, Verbosity};

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calculator", version, about)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress all log output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive terminal calculator
    Run,

    /// Feed key presses through the calculator and print the display
    Replay(ReplayArgs),
}

/// Arguments for `replay`
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Keys to press: `Enter`, `Escape`, `Backspace`, or runs of keypad
    /// characters such as `12.5` or `+`
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key instead of only the final one
    #[arg(short, long)]
    pub transcript: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON transcript
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Builds the runtime configuration from the parsed arguments
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Info,
                _ => Verbosity::Debug,
            }
        };

        let config = CliConfig::new().with_verbosity(verbosity);
        match &self.command {
            Some(Commands::Replay(args)) => config
                .with_format(args.format.into())
                .with_transcript(args.transcript),
            Some(Commands::Run) | None => config,
        }
    }
}
