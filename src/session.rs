//! Page controller: the intake form and the board it produces.

use log::{debug, info};

use crate::bank::QuestionSource;
use crate::board::Board;
use crate::error::Result;

/// Which intake field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeField {
    #[default]
    JobDescription,
    Resume,
}

impl IntakeField {
    pub fn next(self) -> Self {
        match self {
            IntakeField::JobDescription => IntakeField::Resume,
            IntakeField::Resume => IntakeField::JobDescription,
        }
    }
}

/// Job description and résumé as pasted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub job_description: String,
    pub resume: String,
    pub submitted: bool,
}

impl IntakeForm {
    /// Both fields must hold non-blank text.
    pub fn can_submit(&self) -> bool {
        !self.job_description.trim().is_empty() && !self.resume.trim().is_empty()
    }

    pub fn field(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::JobDescription => &self.job_description,
            IntakeField::Resume => &self.resume,
        }
    }

    pub fn field_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::JobDescription => &mut self.job_description,
            IntakeField::Resume => &mut self.resume,
        }
    }

    pub fn insert_char(&mut self, field: IntakeField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn insert_str(&mut self, field: IntakeField, text: &str) {
        self.field_mut(field).push_str(text);
    }

    pub fn backspace(&mut self, field: IntakeField) {
        self.field_mut(field).pop();
    }

    /// Clear both fields and the submitted flag.
    pub fn reset(&mut self) {
        *self = IntakeForm::default();
    }
}

/// Everything one practice run holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub form: IntakeForm,
    pub board: Option<Board>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a prefilled form.
    pub fn with_form(job_description: impl Into<String>, resume: impl Into<String>) -> Self {
        Session {
            form: IntakeForm {
                job_description: job_description.into(),
                resume: resume.into(),
                submitted: false,
            },
            board: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.form.submitted && self.board.is_some()
    }

    /// Submit the intake form, building a fresh board from `source`.
    ///
    /// Returns `Ok(false)` when either field is blank.
    pub fn submit_form(&mut self, source: &dyn QuestionSource) -> Result<bool> {
        if !self.form.can_submit() {
            debug!("form submit ignored: missing job description or résumé");
            return Ok(false);
        }
        let questions = source.generate(&self.form.job_description, &self.form.resume)?;
        info!(
            "practice started with {} technical and {} behavioral questions",
            questions.technical.len(),
            questions.behavioral.len()
        );
        self.board = Some(Board::new(questions));
        self.form.submitted = true;
        Ok(true)
    }

    /// Return to the input view, discarding every card's state.
    pub fn reset_form(&mut self) {
        debug!("form reset");
        self.form.reset();
        self.board = None;
    }
}
