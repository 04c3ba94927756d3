use serde::{Deserialize, Serialize};

/// Category assigned when a block has no `Category:` line.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Number of answer options per question (A-D).
pub const NUM_OPTIONS: usize = 4;

/// One quiz question, laid out the way the database import expects it.
///
/// Missing fields deserialize to their defaults so an export edited by hand
/// still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option_index: usize,
    pub category: String,
}

impl Question {
    /// A question can be imported once it has a text and a first option.
    pub fn is_complete(&self) -> bool {
        !self.question_text.is_empty() && !self.option_a.is_empty()
    }
}

impl Default for Question {
    fn default() -> Self {
        Self {
            question_text: String::new(),
            option_a: String::new(),
            option_b: String::new(),
            option_c: String::new(),
            option_d: String::new(),
            correct_option_index: 0,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Maps an answer letter to its option index.
///
/// Case-insensitive. Anything other than A-D falls back to 0.
pub fn answer_index(letter: &str) -> usize {
    match letter.trim().to_uppercase().as_str() {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        "D" => 3,
        _ => 0,
    }
}
