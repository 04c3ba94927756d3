//! The export document: every question keyed under a single root node.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::models::question::{NUM_OPTIONS, Question};

/// Name of the root node in the database.
pub const ROOT_KEY: &str = "quizzes";

/// Prefix of the generated per-question keys.
pub const RECORD_KEY_PREFIX: &str = "record_";

/// Questions keyed `record_1`, `record_2`, ... in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "quizzes", default)]
    records: IndexMap<String, Question>,
}

/// A problem found while checking an existing export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIssue {
    /// Key at this position is not the expected `record_<n>`.
    UnexpectedKey { key: String, expected: String },
    /// A required field is empty.
    MissingField { key: String, field: &'static str },
    /// `correctOptionIndex` does not point at one of the four options.
    IndexOutOfRange { key: String, index: usize },
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentIssue::UnexpectedKey { key, expected } => {
                write!(f, "key '{}' should be '{}'", key, expected)
            }
            DocumentIssue::MissingField { key, field } => {
                write!(f, "{}: '{}' is empty", key, field)
            }
            DocumentIssue::IndexOutOfRange { key, index } => {
                write!(f, "{}: correctOptionIndex {} is out of range", key, index)
            }
        }
    }
}

/// Key for the question at zero-based `position`: `record_1` for 0.
pub fn record_key(position: usize) -> String {
    format!("{}{}", RECORD_KEY_PREFIX, position + 1)
}

impl Document {
    /// Number the questions from `record_1` in order.
    ///
    /// `source` only names the input in the error when there is nothing to
    /// export.
    pub fn assemble(questions: Vec<Question>, source: &Path) -> Result<Self> {
        if questions.is_empty() {
            return Err(ConvertError::NoValidQuestions(source.to_path_buf()));
        }

        let records = questions
            .into_iter()
            .enumerate()
            .map(|(i, question)| (record_key(i), question))
            .collect();

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Question> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.records.values()
    }

    /// Pretty-printed JSON with two-space indentation and literal UTF-8.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate a document that did not necessarily come from `assemble`.
    pub fn check(&self) -> Vec<DocumentIssue> {
        let mut issues = Vec::new();

        for (i, (key, question)) in self.records.iter().enumerate() {
            let expected = record_key(i);
            if *key != expected {
                issues.push(DocumentIssue::UnexpectedKey {
                    key: key.clone(),
                    expected,
                });
            }

            if question.question_text.is_empty() {
                issues.push(DocumentIssue::MissingField {
                    key: key.clone(),
                    field: "questionText",
                });
            }

            if question.option_a.is_empty() {
                issues.push(DocumentIssue::MissingField {
                    key: key.clone(),
                    field: "optionA",
                });
            }

            if question.correct_option_index >= NUM_OPTIONS {
                issues.push(DocumentIssue::IndexOutOfRange {
                    key: key.clone(),
                    index: question.correct_option_index,
                });
            }
        }

        issues
    }
}
