//! The question board: both question lists plus one card per question.
//!
//! Cards are addressed by `(category, index)`. The board owns them so that
//! card state survives switching tabs; it is discarded as a whole when the
//! intake form is reset.

use crate::card::CardState;
use crate::feedback::FeedbackProvider;
use crate::types::{Question, QuestionCategory, QuestionSet};

/// Per-category tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub solved: usize,
    pub submitted: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    questions: QuestionSet,
    technical: Vec<CardState>,
    behavioral: Vec<CardState>,
}

impl Board {
    /// Build a board with a fresh card for every question.
    pub fn new(questions: QuestionSet) -> Self {
        let technical = vec![CardState::new(); questions.technical.len()];
        let behavioral = vec![CardState::new(); questions.behavioral.len()];
        Board {
            questions,
            technical,
            behavioral,
        }
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn questions(&self, category: QuestionCategory) -> &[Question] {
        self.questions.get(category)
    }

    pub fn cards(&self, category: QuestionCategory) -> &[CardState] {
        match category {
            QuestionCategory::Technical => &self.technical,
            QuestionCategory::Behavioral => &self.behavioral,
        }
    }

    fn cards_mut(&mut self, category: QuestionCategory) -> &mut [CardState] {
        match category {
            QuestionCategory::Technical => &mut self.technical,
            QuestionCategory::Behavioral => &mut self.behavioral,
        }
    }

    pub fn len(&self, category: QuestionCategory) -> usize {
        self.questions(category).len()
    }

    pub fn is_empty(&self, category: QuestionCategory) -> bool {
        self.len(category) == 0
    }

    /// Question and card at a position.
    pub fn entry(&self, category: QuestionCategory, index: usize) -> Option<(&Question, &CardState)> {
        let question = self.questions(category).get(index)?;
        let card = self.cards(category).get(index)?;
        Some((question, card))
    }

    pub fn card(&self, category: QuestionCategory, index: usize) -> Option<&CardState> {
        self.cards(category).get(index)
    }

    pub fn card_mut(&mut self, category: QuestionCategory, index: usize) -> Option<&mut CardState> {
        self.cards_mut(category).get_mut(index)
    }

    /// Submit the answer on one card. False if out of range or not allowed.
    pub fn submit_answer(
        &mut self,
        category: QuestionCategory,
        index: usize,
        provider: &dyn FeedbackProvider,
    ) -> bool {
        let Some(question) = self.questions.get(category).get(index) else {
            return false;
        };
        let cards = match category {
            QuestionCategory::Technical => &mut self.technical,
            QuestionCategory::Behavioral => &mut self.behavioral,
        };
        match cards.get_mut(index) {
            Some(card) => card.submit_answer(provider, category, question),
            None => false,
        }
    }

    pub fn progress(&self, category: QuestionCategory) -> Progress {
        let cards = self.cards(category);
        Progress {
            solved: cards.iter().filter(|c| c.solved()).count(),
            submitted: cards.iter().filter(|c| c.submitted()).count(),
            total: cards.len(),
        }
    }
}
