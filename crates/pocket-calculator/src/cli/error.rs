//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (terminal setup, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// Command not available in this build
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Create an unsupported-command error
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("tty gone"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CliError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            CliError::unsupported("run needs the tui feature").to_string(),
            "Unsupported: run needs the tui feature"
        );
        assert!(CliError::logging("already set")
            .to_string()
            .contains("already set"));
    }
}
