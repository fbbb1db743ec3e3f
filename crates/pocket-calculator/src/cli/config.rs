//! CLI configuration

use serde::{Deserialize, Serialize};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - no log output
    Quiet,
    /// Normal - errors only
    #[default]
    Normal,
    /// Verbose - warnings such as rejected calculations
    Verbose,
    /// Info - session lifecycle
    Info,
    /// Debug - every submitted token
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "error",
            Self::Verbose => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Replay output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One display line per printed step
    #[default]
    Text,
    /// JSON array of steps
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Replay output format
    pub format: OutputFormat,
    /// Print every display change during replay
    pub transcript: bool,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set replay output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the replay transcript
    #[must_use]
    pub const fn with_transcript(mut self, transcript: bool) -> Self {
        self.transcript = transcript;
        self
    }
}
