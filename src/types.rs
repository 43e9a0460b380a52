//! Domain types for interview-prep.
//!
//! Questions are immutable records supplied by a question source. They
//! carry no identity beyond their position in a category's list.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ENUMS
// ============================================================================

/// How hard a question is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Badge label shown next to the question title.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Question classification. Drives the tab, styling, and canned feedback.
///
/// Not derived from the question itself: the source files each question
/// under exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
}

impl QuestionCategory {
    /// Both categories in tab order.
    pub const ALL: [QuestionCategory; 2] = [QuestionCategory::Technical, QuestionCategory::Behavioral];

    /// Human label for tabs and reports.
    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Behavioral => "Behavioral",
        }
    }

    /// The other tab.
    pub fn other(self) -> Self {
        match self {
            QuestionCategory::Technical => QuestionCategory::Behavioral,
            QuestionCategory::Behavioral => QuestionCategory::Technical,
        }
    }

    /// Zero-based position in [`QuestionCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            QuestionCategory::Technical => 0,
            QuestionCategory::Behavioral => 1,
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Human,
    /// Machine-readable JSON output.
    Json,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A single interview question with its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub difficulty: Difficulty,
    #[serde(alias = "modelAnswer")]
    pub model_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, difficulty: Difficulty, model_answer: impl Into<String>) -> Self {
        Question {
            text: text.into(),
            difficulty,
            model_answer: model_answer.into(),
        }
    }
}

/// The two question collections produced for one intake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub technical: Vec<Question>,
    #[serde(default)]
    pub behavioral: Vec<Question>,
}

impl QuestionSet {
    /// Questions for one category, in display order.
    pub fn get(&self, category: QuestionCategory) -> &[Question] {
        match category {
            QuestionCategory::Technical => &self.technical,
            QuestionCategory::Behavioral => &self.behavioral,
        }
    }

    /// Total number of questions across both categories.
    pub fn len(&self) -> usize {
        self.technical.len() + self.behavioral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
