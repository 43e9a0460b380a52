//! Per-question interaction state.
//!
//! One [`CardState`] exists per displayed question. All transitions are
//! user-triggered and synchronous. Guards never fail loudly: an action
//! whose precondition does not hold is a no-op, and the view hides or
//! disables the matching control.

use log::debug;

use crate::feedback::FeedbackProvider;
use crate::types::{Question, QuestionCategory};

/// Transient UI state for one question card.
///
/// Fields are read through accessors and written only by the guarded
/// transitions below, so `solved` and `feedback` cannot be rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    expanded: bool,
    user_answer: String,
    submitted: bool,
    /// Set exactly once, on the first successful submit.
    feedback: Option<String>,
    /// While true the model answer replaces the answer-entry view.
    show_answer: bool,
    /// Terminal: never cleared once set.
    solved: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    // ------------------------------------------------------------------
    // Expansion
    // ------------------------------------------------------------------

    /// Flip expanded. Collapsing keeps every other field.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    // ------------------------------------------------------------------
    // Answer entry
    // ------------------------------------------------------------------

    /// The answer box accepts input until the answer is submitted or solved.
    pub fn answer_editable(&self) -> bool {
        !self.submitted && !self.solved
    }

    /// Replace the answer text. Ignored once the box is locked.
    pub fn set_answer(&mut self, text: impl Into<String>) {
        if self.answer_editable() {
            self.user_answer = text.into();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.answer_editable() {
            self.user_answer.push(c);
        }
    }

    /// Append pasted text in one step.
    pub fn insert_str(&mut self, text: &str) {
        if self.answer_editable() {
            self.user_answer.push_str(text);
        }
    }

    pub fn backspace(&mut self) {
        if self.answer_editable() {
            self.user_answer.pop();
        }
    }

    fn has_answer(&self) -> bool {
        !self.user_answer.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn can_submit(&self) -> bool {
        self.has_answer() && self.submit_visible()
    }

    /// Whether the submit control is shown at all.
    pub fn submit_visible(&self) -> bool {
        !self.submitted && !self.solved
    }

    /// Submit the answer and record feedback from `provider`.
    ///
    /// Returns true if the submit happened.
    pub fn submit_answer(
        &mut self,
        provider: &dyn FeedbackProvider,
        category: QuestionCategory,
        question: &Question,
    ) -> bool {
        if !self.can_submit() {
            return false;
        }
        let feedback = provider.feedback(category, question, &self.user_answer);
        debug!("submitted {} answer ({} chars)", category, self.user_answer.chars().count());
        self.feedback = Some(feedback);
        self.submitted = true;
        true
    }

    // ------------------------------------------------------------------
    // Model answer
    // ------------------------------------------------------------------

    pub fn reveal_model_answer(&mut self) {
        self.show_answer = true;
    }

    pub fn hide_model_answer(&mut self) {
        self.show_answer = false;
    }

    pub fn toggle_model_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    // ------------------------------------------------------------------
    // Solved
    // ------------------------------------------------------------------

    /// Solving needs either typed content or a prior submit.
    pub fn can_mark_solved(&self) -> bool {
        !self.solved && (self.has_answer() || self.submitted)
    }

    /// Whether the solve control is shown at all.
    pub fn solve_visible(&self) -> bool {
        !self.solved
    }

    /// Mark the question solved. Returns true on the first effective call.
    pub fn mark_solved(&mut self) -> bool {
        if !self.can_mark_solved() {
            return false;
        }
        debug!("question marked solved");
        self.solved = true;
        true
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{BEHAVIORAL_FEEDBACK, CannedFeedback, TECHNICAL_FEEDBACK};
    use crate::types::Difficulty;

    fn closure_question() -> Question {
        Question::new(
            "What is a closure?",
            Difficulty::Medium,
            "A function together with its captured environment.",
        )
    }

    fn submit(card: &mut CardState, category: QuestionCategory) -> bool {
        card.submit_answer(&CannedFeedback, category, &closure_question())
    }

    #[test]
    fn new_card_starts_blank() {
        let card = CardState::new();
        assert!(!card.expanded);
        assert!(!card.submitted);
        assert!(!card.show_answer);
        assert!(!card.solved);
        assert_eq!(card.user_answer, "");
        assert_eq!(card.feedback, None);
    }

    #[test]
    fn collapsing_keeps_answer_and_feedback() {
        let mut card = CardState::new();
        card.toggle_expanded();
        card.set_answer("some text");
        assert!(submit(&mut card, QuestionCategory::Technical));
        card.toggle_expanded();
        assert!(!card.expanded);
        card.toggle_expanded();
        assert_eq!(card.user_answer, "some text");
        assert!(card.submitted);
        assert!(card.feedback.is_some());
    }

    #[test]
    fn cannot_submit_empty_or_whitespace() {
        let mut card = CardState::new();
        assert!(!card.can_submit());
        assert!(!submit(&mut card, QuestionCategory::Technical));

        card.set_answer("   \n\t ");
        assert!(!card.can_submit());
        assert!(!submit(&mut card, QuestionCategory::Technical));
        assert!(!card.submitted);
        assert_eq!(card.feedback, None);

        card.set_answer("x");
        assert!(card.can_submit());
    }

    #[test]
    fn submit_sets_category_feedback() {
        let mut tech = CardState::new();
        tech.set_answer("answer");
        assert!(submit(&mut tech, QuestionCategory::Technical));
        assert_eq!(tech.feedback.as_deref(), Some(TECHNICAL_FEEDBACK));

        let mut behav = CardState::new();
        behav.set_answer("answer");
        assert!(submit(&mut behav, QuestionCategory::Behavioral));
        assert_eq!(behav.feedback.as_deref(), Some(BEHAVIORAL_FEEDBACK));
    }

    #[test]
    fn second_submit_has_no_effect() {
        let mut card = CardState::new();
        card.set_answer("answer");
        assert!(submit(&mut card, QuestionCategory::Technical));
        let before = card.clone();
        assert!(!submit(&mut card, QuestionCategory::Behavioral));
        assert_eq!(card, before);
        assert!(!card.submit_visible());
    }

    #[test]
    fn answer_locked_after_submit() {
        let mut card = CardState::new();
        card.set_answer("first");
        submit(&mut card, QuestionCategory::Technical);
        card.insert_char('!');
        card.backspace();
        card.set_answer("changed");
        assert_eq!(card.user_answer, "first");
    }

    #[test]
    fn pasted_text_keeps_tabs_and_newlines() {
        let mut card = CardState::new();
        card.insert_char('>');
        card.insert_str(" fn main() {\n\tprintln!();\n}");
        assert_eq!(card.user_answer(), "> fn main() {\n\tprintln!();\n}");

        submit(&mut card, QuestionCategory::Technical);
        card.insert_str("more");
        assert_eq!(card.user_answer(), "> fn main() {\n\tprintln!();\n}");
    }

    #[test]
    fn accessors_reflect_transitions() {
        let mut card = CardState::new();
        card.toggle_expanded();
        card.set_answer("answer");
        submit(&mut card, QuestionCategory::Technical);
        card.mark_solved();
        card.reveal_model_answer();
        assert!(card.expanded());
        assert!(card.submitted());
        assert!(card.solved());
        assert!(card.show_answer());
        assert_eq!(card.user_answer(), "answer");
        assert_eq!(card.feedback(), Some(TECHNICAL_FEEDBACK));

        // Nothing reachable from outside the card undoes solve or feedback.
        card.hide_model_answer();
        card.toggle_expanded();
        card.set_answer("");
        card.backspace();
        assert!(!submit(&mut card, QuestionCategory::Behavioral));
        assert!(!card.mark_solved());
        assert!(card.solved());
        assert_eq!(card.feedback(), Some(TECHNICAL_FEEDBACK));
        assert_eq!(card.user_answer(), "answer");
    }

    #[test]
    fn typing_and_backspace_edit_answer() {
        let mut card = CardState::new();
        for c in "abc".chars() {
            card.insert_char(c);
        }
        card.backspace();
        assert_eq!(card.user_answer, "ab");
    }

    #[test]
    fn toggling_model_answer_preserves_answer_state() {
        let mut card = CardState::new();
        card.set_answer("draft");
        submit(&mut card, QuestionCategory::Behavioral);
        let (answer, submitted, feedback) =
            (card.user_answer.clone(), card.submitted, card.feedback.clone());

        for _ in 0..3 {
            card.toggle_model_answer();
            assert_eq!(card.user_answer, answer);
            assert_eq!(card.submitted, submitted);
            assert_eq!(card.feedback, feedback);
        }
        card.reveal_model_answer();
        assert!(card.show_answer);
        card.hide_model_answer();
        assert!(!card.show_answer);
        assert_eq!(card.user_answer, answer);
    }

    #[test]
    fn solve_requires_answer_or_submit() {
        let mut card = CardState::new();
        assert!(!card.can_mark_solved());
        assert!(!card.mark_solved());
        assert!(!card.solved);

        card.set_answer("typed but not submitted");
        assert!(card.can_mark_solved());
        assert!(card.mark_solved());
        assert!(card.solved);
    }

    #[test]
    fn solve_is_idempotent_and_permanent() {
        let mut card = CardState::new();
        card.set_answer("answer");
        assert!(card.mark_solved());
        assert!(!card.mark_solved());
        assert!(card.solved);
        card.toggle_expanded();
        card.toggle_model_answer();
        card.toggle_expanded();
        assert!(card.solved);
        assert!(!card.solve_visible());
    }

    #[test]
    fn solved_card_locks_answer_and_hides_submit() {
        let mut card = CardState::new();
        card.set_answer("answer");
        card.mark_solved();
        assert!(!card.answer_editable());
        assert!(!card.submit_visible());
        card.insert_char('x');
        assert_eq!(card.user_answer, "answer");
        assert!(!submit(&mut card, QuestionCategory::Technical));
        assert_eq!(card.feedback, None);
    }
}
