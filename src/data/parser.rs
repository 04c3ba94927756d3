//! Parser for plain-text question files.
//!
//! # Format
//! ```text
//! # comment lines are ignored anywhere
//! Question: What is the capital of Brazil?
//! A: São Paulo
//! B: Rio de Janeiro
//! C: Brasília
//! D: Salvador
//! Answer: C
//! Category: Geography
//!
//! Question: Next question...
//! ```
//!
//! Questions are separated by one or more blank lines. `Category:` is
//! optional and defaults to [`DEFAULT_CATEGORY`](crate::models::DEFAULT_CATEGORY).

use tracing::{debug, warn};

use crate::models::{Question, answer_index};

/// Outcome of parsing a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Complete questions, in file order.
    pub questions: Vec<Question>,
    /// 1-based positions of the blocks that were dropped.
    pub skipped_blocks: Vec<usize>,
    /// Number of blocks seen, dropped ones included.
    pub total_blocks: usize,
}

/// Parse file content into questions, dropping incomplete blocks.
pub fn parse(content: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, block) in split_blocks(content).iter().enumerate() {
        let position = idx + 1;
        let question = parse_block(block);

        if question.is_complete() {
            debug!(block = position, category = %question.category, "parsed question");
            report.questions.push(question);
        } else {
            warn!("block {} skipped (incomplete fields)", position);
            report.skipped_blocks.push(position);
        }
    }

    report.total_blocks = report.questions.len() + report.skipped_blocks.len();
    report
}

/// Drop comment lines, then group the rest into blank-line separated blocks.
///
/// Only an empty line separates blocks. A line holding just whitespace stays
/// inside its block and contributes nothing.
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('#') {
            continue;
        }

        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else if !trimmed.is_empty() {
            current.push(trimmed);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[&str]) -> Question {
    let mut question = Question::default();

    for line in lines {
        match parse_line(line) {
            LineType::Question(text) => question.question_text = text.to_string(),
            LineType::OptionA(text) => question.option_a = text.to_string(),
            LineType::OptionB(text) => question.option_b = text.to_string(),
            LineType::OptionC(text) => question.option_c = text.to_string(),
            LineType::OptionD(text) => question.option_d = text.to_string(),
            LineType::Answer(letter) => question.correct_option_index = answer_index(letter),
            LineType::Category(text) => question.category = text.to_string(),
            LineType::Text => {}
        }
    }

    question
}

fn parse_line(line: &str) -> LineType<'_> {
    if let Some(rest) = line.strip_prefix("Question:") {
        LineType::Question(rest.trim())
    } else if let Some(rest) = line.strip_prefix("A:") {
        LineType::OptionA(rest.trim())
    } else if let Some(rest) = line.strip_prefix("B:") {
        LineType::OptionB(rest.trim())
    } else if let Some(rest) = line.strip_prefix("C:") {
        LineType::OptionC(rest.trim())
    } else if let Some(rest) = line.strip_prefix("D:") {
        LineType::OptionD(rest.trim())
    } else if let Some(rest) = line.strip_prefix("Answer:") {
        LineType::Answer(rest.trim())
    } else if let Some(rest) = line.strip_prefix("Category:") {
        LineType::Category(rest.trim())
    } else {
        LineType::Text
    }
}

enum LineType<'a> {
    Question(&'a str),
    OptionA(&'a str),
    OptionB(&'a str),
    OptionC(&'a str),
    OptionD(&'a str),
    Answer(&'a str),
    Category(&'a str),
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    const BRAZIL: &str = "Question: Capital of Brazil?\nA: São Paulo\nB: Rio\nC: Brasília\nD: Salvador\nAnswer: C\nCategory: Geography";

    #[test]
    fn parse_single_block() {
        let report = parse(BRAZIL);
        assert_eq!(report.total_blocks, 1);
        assert!(report.skipped_blocks.is_empty());
        assert_eq!(
            report.questions,
            vec![Question {
                question_text: "Capital of Brazil?".to_string(),
                option_a: "São Paulo".to_string(),
                option_b: "Rio".to_string(),
                option_c: "Brasília".to_string(),
                option_d: "Salvador".to_string(),
                correct_option_index: 2,
                category: "Geography".to_string(),
            }]
        );
    }

    #[test]
    fn values_are_trimmed() {
        let report = parse("   Question:    Padded?   \n  A:\tyes  \nAnswer:  b ");
        let q = &report.questions[0];
        assert_eq!(q.question_text, "Padded?");
        assert_eq!(q.option_a, "yes");
        assert_eq!(q.correct_option_index, 1);
    }

    #[test]
    fn lines_in_any_order() {
        let report = parse("Category: Math\nAnswer: D\nD: 4\nA: 1\nQuestion: 2+2?");
        let q = &report.questions[0];
        assert_eq!(q.question_text, "2+2?");
        assert_eq!(q.option_a, "1");
        assert_eq!(q.option_d, "4");
        assert_eq!(q.correct_option_index, 3);
        assert_eq!(q.category, "Math");
    }

    #[test]
    fn missing_category_defaults() {
        let report = parse("Question: Q\nA: a\nAnswer: A");
        assert_eq!(report.questions[0].category, "Geral");
    }

    #[test]
    fn invalid_answer_letter_defaults_to_zero() {
        let report = parse("Question: Q\nA: a\nB: b\nAnswer: Z");
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].correct_option_index, 0);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let report = parse("question: lower\nQuestion: Upper\na: lower a\nA: upper a");
        let q = &report.questions[0];
        assert_eq!(q.question_text, "Upper");
        assert_eq!(q.option_a, "upper a");
    }

    #[test]
    fn unknown_lines_ignored() {
        let report = parse("Question: Q\nsome note\nA: a\nHint: none");
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].question_text, "Q");
    }

    #[test]
    fn skip_incomplete_blocks() {
        let input = "A: no question\n\nQuestion: First\nA: a\n\nQuestion: No option A\nB: b\n\nQuestion: Second\nA: a";
        let report = parse(input);
        assert_eq!(report.total_blocks, 4);
        assert_eq!(report.skipped_blocks, vec![1, 3]);
        let texts: Vec<&str> = report
            .questions
            .iter()
            .map(|q| q.question_text.as_str())
            .collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }

    #[test]
    fn comment_mid_block_does_not_split() {
        let input = "Question: Q\n# note about the options\nA: a\n  # indented comment\nAnswer: A";
        let report = parse(input);
        assert_eq!(report.total_blocks, 1);
        assert_eq!(report.questions[0].option_a, "a");
    }

    #[test]
    fn comment_lines_never_match_labels() {
        let report = parse("# Question: hidden\nA: a");
        assert_eq!(report.skipped_blocks, vec![1]);
    }

    #[test]
    fn many_blank_lines_separate_once() {
        let input = "Question: Q1\nA: a\n\n\n\n# divider\n\nQuestion: Q2\nA: b\n";
        let report = parse(input);
        assert_eq!(report.total_blocks, 2);
        assert_eq!(report.questions.len(), 2);
    }

    #[test]
    fn whitespace_only_line_does_not_split() {
        let report = parse("Question: Q1\nA: a\n   \nQuestion: Q2\nA: b");
        assert_eq!(report.total_blocks, 1);
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].question_text, "Q2");
        assert_eq!(report.questions[0].option_a, "b");
    }

    #[test]
    fn whitespace_only_group_is_not_a_block() {
        let report = parse("Question: Q1\nA: a\n\n  \t\n\nQuestion: Q2\nA: b");
        assert_eq!(report.total_blocks, 2);
        assert!(report.skipped_blocks.is_empty());
    }

    #[test]
    fn extra_blank_lines_do_not_shift_positions() {
        let report = parse("Question: Q1\nA: a\n\n\n\nB: bad");
        assert_eq!(report.total_blocks, 2);
        assert_eq!(report.skipped_blocks, vec![2]);
    }

    #[test]
    fn skipped_block_is_logged() {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || CapturedLog(writer.clone()))
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            parse("Question: Q1\nA: a\n\nB: no question")
        });

        assert_eq!(report.skipped_blocks, vec![2]);
        let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("block 2 skipped (incomplete fields)"));
    }

    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn crlf_line_endings() {
        let report = parse("Question: Q1\r\nA: a\r\n\r\nQuestion: Q2\r\nA: b\r\nAnswer: B\r\n");
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[1].option_a, "b");
        assert_eq!(report.questions[1].correct_option_index, 1);
    }

    #[test]
    fn parse_empty_content() {
        assert_eq!(parse(""), ParseReport::default());
        assert_eq!(parse("# only\n# comments\n\n").total_blocks, 0);
    }
}
