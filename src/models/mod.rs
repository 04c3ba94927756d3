pub mod document;
pub mod question;

pub use document::{Document, DocumentIssue, ROOT_KEY, record_key};
pub use question::{DEFAULT_CATEGORY, NUM_OPTIONS, Question, answer_index};
