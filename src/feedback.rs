//! Answer feedback providers.
//!
//! The card state machine asks a [`FeedbackProvider`] for feedback when an
//! answer is submitted. The only provider shipped is [`CannedFeedback`],
//! which returns one fixed string per category regardless of the answer.

use crate::types::{Question, QuestionCategory};

/// Canned feedback for technical answers.
pub const TECHNICAL_FEEDBACK: &str = "Your answer shows an understanding of the technical concepts, \
but it could use more concrete examples to support your points. Consider adding an example of \
how you have applied these techniques in the past.";

/// Canned feedback for behavioral answers.
pub const BEHAVIORAL_FEEDBACK: &str = "Your answer shows your behavior patterns well, but it could be \
more structured. Try the STAR method (Situation, Task, Action, Result).";

/// Produces feedback for a submitted answer.
///
/// Implementations must return a non-empty string.
pub trait FeedbackProvider {
    fn feedback(&self, category: QuestionCategory, question: &Question, answer: &str) -> String;
}

/// Fixed feedback chosen by category only.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedFeedback;

impl CannedFeedback {
    pub fn text_for(category: QuestionCategory) -> &'static str {
        match category {
            QuestionCategory::Technical => TECHNICAL_FEEDBACK,
            QuestionCategory::Behavioral => BEHAVIORAL_FEEDBACK,
        }
    }
}

impl FeedbackProvider for CannedFeedback {
    fn feedback(&self, category: QuestionCategory, _question: &Question, _answer: &str) -> String {
        Self::text_for(category).to_string()
    }
}
