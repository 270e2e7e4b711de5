//! # CLI Errors
//!
//! Everything that can stop a command, with enough context to print a
//! single-line message.

use std::path::PathBuf;

use config::constants::ConfigError;
use gridit::GridError;
use thiserror::Error;

/// Errors raised by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The input or output document is not valid JSON for its schema.
    #[error("{}: {source}", .path.display())]
    Json {
        /// File being parsed or written
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Command-line settings were rejected.
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),

    /// Grid generation failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl CliError {
    /// Creates an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON error for `path`.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
