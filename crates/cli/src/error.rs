//! CLI error types.

use std::path::PathBuf;

use recurra_core::recurrence::PatternError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Failed to read pattern file {path}: {source}")]
    PatternFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
