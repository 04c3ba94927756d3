//! Error types for quiz conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that end a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("no valid question found in '{}'", .0.display())]
    NoValidQuestions(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{}' has {issues} problem(s)", .path.display())]
    InvalidDocument { path: PathBuf, issues: usize },
}
