//! # quiz-import
//!
//! Converts a plain-text question file into the JSON layout accepted by a
//! realtime database "import JSON" console.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_import::{Config, ConvertError};
//!
//! fn main() -> Result<(), ConvertError> {
//!     // Reads questions.txt and writes quizzes.json in the current directory
//!     let config = Config::in_dir(".");
//!     let summary = quiz_import::convert(&config)?;
//!
//!     print!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod models;
mod summary;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub use data::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, ParseReport, load_document, parse};
pub use error::{ConvertError, Result};
pub use models::{DEFAULT_CATEGORY, Document, DocumentIssue, Question};
pub use summary::Summary;

/// Where to read questions from and where to write the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Parse and summarize without writing the export.
    pub dry_run: bool,
}

impl Config {
    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(DEFAULT_INPUT_FILE),
            output: dir.join(DEFAULT_OUTPUT_FILE),
            dry_run: false,
        }
    }
}

/// Run the whole text-to-JSON conversion.
///
/// Nothing is written unless at least one question is valid.
pub fn convert(config: &Config) -> Result<Summary> {
    let content = data::read_input(&config.input)?;
    info!(path = %config.input.display(), "read question file");

    let report = data::parse(&content);
    if !report.skipped_blocks.is_empty() {
        warn!(
            "{} of {} block(s) skipped",
            report.skipped_blocks.len(),
            report.total_blocks
        );
    }

    let document = Document::assemble(report.questions, &config.input)?;

    if config.dry_run {
        info!(records = document.len(), "dry run, export not written");
        return Ok(Summary::new(&config.input, None, document.questions()));
    }

    data::write_document(&document, &config.output)?;
    info!(path = %config.output.display(), records = document.len(), "wrote export");

    Ok(Summary::new(
        &config.input,
        Some(config.output.as_path()),
        document.questions(),
    ))
}

/// Validate an existing export file.
///
/// Every issue is logged; the error carries the issue count.
pub fn check<P: AsRef<Path>>(path: P) -> Result<Summary> {
    let path = path.as_ref();
    let document = load_document(path)?;

    if document.is_empty() {
        return Err(ConvertError::NoValidQuestions(path.to_path_buf()));
    }

    let issues = document.check();
    for issue in &issues {
        warn!("{}", issue);
    }
    if !issues.is_empty() {
        return Err(ConvertError::InvalidDocument {
            path: path.to_path_buf(),
            issues: issues.len(),
        });
    }

    info!(path = %path.display(), records = document.len(), "export is valid");
    Ok(Summary::new(path, None, document.questions()))
}
