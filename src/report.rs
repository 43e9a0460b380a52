//! Report formatting for question banks and practice sessions.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::board::Board;
use crate::card::CardState;
use crate::types::{Difficulty, OutputFormat, Question, QuestionCategory, QuestionSet};

// ============================================================================
// QUESTION BANK
// ============================================================================

/// Format a question bank, optionally restricted to one category.
pub fn format_bank(
    questions: &QuestionSet,
    only: Option<QuestionCategory>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Human => format_bank_human(questions, only),
        OutputFormat::Json => format_bank_json(questions, only),
    }
}

fn selected_categories(only: Option<QuestionCategory>) -> Vec<QuestionCategory> {
    match only {
        Some(category) => vec![category],
        None => QuestionCategory::ALL.to_vec(),
    }
}

fn format_bank_human(questions: &QuestionSet, only: Option<QuestionCategory>) -> String {
    let mut out = String::new();

    for category in selected_categories(only) {
        let list = questions.get(category);
        out.push_str(&format!("=== {} ({}) ===\n", category, list.len()));
        for (i, q) in list.iter().enumerate() {
            out.push_str(&format!("{:>2}. [{}] {}\n", i + 1, q.difficulty, q.text));
        }
        out.push('\n');
    }

    out
}

fn format_bank_json(questions: &QuestionSet, only: Option<QuestionCategory>) -> String {
    let json = match only {
        None => serde_json::to_string_pretty(questions),
        Some(category) => serde_json::to_string_pretty(questions.get(category)),
    };
    json.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// SESSION SUMMARY
// ============================================================================

/// Format an end-of-session summary of a board.
pub fn format_summary(board: &Board, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_summary_human(board),
        OutputFormat::Json => format_summary_json(board),
    }
}

fn format_summary_human(board: &Board) -> String {
    let mut out = String::new();

    for category in QuestionCategory::ALL {
        let progress = board.progress(category);
        out.push_str(&format!(
            "=== {}: {}/{} solved ===\n",
            category, progress.solved, progress.total
        ));
        for (i, (q, card)) in board
            .questions(category)
            .iter()
            .zip(board.cards(category))
            .enumerate()
        {
            let mark = if card.solved() {
                "✓"
            } else if card.submitted() {
                "•"
            } else {
                " "
            };
            out.push_str(&format!("  [{}] {:>2}. {}\n", mark, i + 1, q.text));
        }
        out.push('\n');
    }

    let solved: usize = QuestionCategory::ALL
        .iter()
        .map(|&c| board.progress(c).solved)
        .sum();
    let submitted: usize = QuestionCategory::ALL
        .iter()
        .map(|&c| board.progress(c).submitted)
        .sum();
    let total = board.question_set().len();

    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Questions:  {}\n", total));
    out.push_str(&format!("Submitted:  {}\n", submitted));
    out.push_str(&format!("Solved:     {}\n", solved));

    out
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    categories: Vec<CategoryJson<'a>>,
}

#[derive(Serialize)]
struct CategoryJson<'a> {
    category: QuestionCategory,
    solved: usize,
    submitted: usize,
    total: usize,
    questions: Vec<QuestionJson<'a>>,
}

#[derive(Serialize)]
struct QuestionJson<'a> {
    text: &'a str,
    difficulty: Difficulty,
    answer: &'a str,
    submitted: bool,
    feedback: Option<&'a str>,
    solved: bool,
}

fn question_json<'a>(q: &'a Question, card: &'a CardState) -> QuestionJson<'a> {
    QuestionJson {
        text: &q.text,
        difficulty: q.difficulty,
        answer: card.user_answer(),
        submitted: card.submitted(),
        feedback: card.feedback(),
        solved: card.solved(),
    }
}

fn format_summary_json(board: &Board) -> String {
    let categories = QuestionCategory::ALL
        .iter()
        .map(|&category| {
            let progress = board.progress(category);
            CategoryJson {
                category,
                solved: progress.solved,
                submitted: progress.submitted,
                total: progress.total,
                questions: board
                    .questions(category)
                    .iter()
                    .zip(board.cards(category))
                    .map(|(q, card)| question_json(q, card))
                    .collect(),
            }
        })
        .collect();

    serde_json::to_string_pretty(&SummaryJson { categories })
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{CannedFeedback, TECHNICAL_FEEDBACK};

    fn sample_set() -> QuestionSet {
        QuestionSet {
            technical: vec![
                Question::new("What is a closure?", Difficulty::Medium, "Function plus environment."),
                Question::new("What is a deadlock?", Difficulty::Hard, "Circular wait."),
            ],
            behavioral: vec![Question::new("Why this company?", Difficulty::Easy, "Research.")],
        }
    }

    fn practiced_board() -> Board {
        let mut board = Board::new(sample_set());
        board
            .card_mut(QuestionCategory::Technical, 0)
            .unwrap()
            .set_answer("A function bundling state");
        board.submit_answer(QuestionCategory::Technical, 0, &CannedFeedback);
        board
            .card_mut(QuestionCategory::Technical, 0)
            .unwrap()
            .mark_solved();
        board
    }

    // --- Bank ---

    #[test]
    fn human_bank_lists_both_categories() {
        let output = format_bank(&sample_set(), None, OutputFormat::Human);
        assert!(output.contains("=== Technical (2) ==="));
        assert!(output.contains("=== Behavioral (1) ==="));
        assert!(output.contains(" 1. [Medium] What is a closure?"));
        assert!(output.contains(" 2. [Hard] What is a deadlock?"));
    }

    #[test]
    fn human_bank_filters_category() {
        let output = format_bank(&sample_set(), Some(QuestionCategory::Behavioral), OutputFormat::Human);
        assert!(output.contains("Why this company?"));
        assert!(!output.contains("closure"));
    }

    #[test]
    fn json_bank_roundtrips() {
        let output = format_bank(&sample_set(), None, OutputFormat::Json);
        let parsed: QuestionSet = serde_json::from_str(&output).expect("valid bank JSON");
        assert_eq!(parsed, sample_set());
    }

    #[test]
    fn json_bank_filtered_is_array() {
        let output = format_bank(&sample_set(), Some(QuestionCategory::Technical), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
        assert_eq!(parsed[0]["difficulty"], "medium");
    }

    // --- Summary ---

    #[test]
    fn human_summary_marks_solved() {
        let output = format_summary(&practiced_board(), OutputFormat::Human);
        assert!(output.contains("=== Technical: 1/2 solved ==="));
        assert!(output.contains("[✓]  1. What is a closure?"));
        assert!(output.contains("[ ]  2. What is a deadlock?"));
        assert!(output.contains("Questions:  3"));
        assert!(output.contains("Submitted:  1"));
        assert!(output.contains("Solved:     1"));
    }

    #[test]
    fn human_summary_fresh_board() {
        let output = format_summary(&Board::new(sample_set()), OutputFormat::Human);
        assert!(output.contains("=== Behavioral: 0/1 solved ==="));
        assert!(output.contains("Solved:     0"));
    }

    #[test]
    fn json_summary_has_expected_fields() {
        let output = format_summary(&practiced_board(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let tech = &parsed["categories"][0];
        assert_eq!(tech["category"], "technical");
        assert_eq!(tech["solved"], 1);
        assert_eq!(tech["total"], 2);

        let q = &tech["questions"][0];
        assert_eq!(q["answer"], "A function bundling state");
        assert_eq!(q["feedback"], TECHNICAL_FEEDBACK);
        assert_eq!(q["solved"], true);
        assert!(tech["questions"][1]["feedback"].is_null());
        assert_eq!(parsed["categories"][1]["category"], "behavioral");
    }
}
