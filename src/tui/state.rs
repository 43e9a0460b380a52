//! TUI state algebra: pure types, zero effects.
//!
//! These types define the whole TUI state space. The transition function
//! and the rendering layer both program against them.
//!
//! Screen variants carry only per-screen navigation state (focus, cursor,
//! editing flag). Form text and card state live in the [`Session`] held by
//! [`App`]. Scroll offsets are derived during rendering, not stored here.

use crate::session::{IntakeField, Session};
use crate::types::QuestionCategory;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen, carrying per-screen navigation state.
    pub screen: Screen,

    /// Intake form and, once submitted, the question board.
    pub session: Session,

    /// One-line message shown above the help line (e.g. a source error).
    pub notice: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Job description and résumé entry.
    Intake { focus: IntakeField },

    /// Question cards for one tab.
    Questions {
        tab: QuestionCategory,
        /// Focused card index within the tab.
        cursor: usize,
        /// Keystrokes go into the focused card's answer box.
        editing: bool,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::intake()
    }
}

/// How raw keys should be interpreted on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands.
    Navigate,
    /// Printable keys insert text.
    Text,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert a character into the focused text box.
    Insert(char),
    /// Insert a line break into the focused text box.
    Newline,
    /// Append a bracketed paste to the focused text box.
    Paste(String),
    /// Delete the last character of the focused text box.
    Backspace,
    /// Move focus to the other intake field.
    NextField,
    /// Submit the form or the focused answer.
    Submit,
    /// Move cursor up a card.
    MoveUp,
    /// Move cursor down a card.
    MoveDown,
    /// Expand or collapse the focused card.
    ToggleExpand,
    /// Start typing into the focused card's answer.
    StartEditing,
    /// Leave editing, or go back.
    Back,
    /// Reveal or hide the model answer.
    ToggleModelAnswer,
    /// Mark the focused question solved.
    MarkSolved,
    /// Switch to the other tab.
    NextTab,
    /// Switch to a tab by number (1 technical, 2 behavioral).
    SelectTab(u8),
    /// Back to the intake form, discarding everything.
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
///
/// The effects boundary inspects it to decide what to render and which
/// side effects to execute.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Ask the question source for questions and open the board.
    GenerateQuestions,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// App on the intake screen with an empty form.
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// App on the intake screen with a given (possibly prefilled) session.
    pub fn with_session(session: Session) -> Self {
        App {
            screen: Screen::intake(),
            session,
            notice: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Intake with focus on the job description.
    pub fn intake() -> Self {
        Screen::Intake {
            focus: IntakeField::JobDescription,
        }
    }

    /// First card of the technical tab, not editing.
    pub fn questions() -> Self {
        Screen::questions_tab(QuestionCategory::Technical)
    }

    pub fn questions_tab(tab: QuestionCategory) -> Self {
        Screen::Questions {
            tab,
            cursor: 0,
            editing: false,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self {
            Screen::Intake { .. } => InputMode::Text,
            Screen::Questions { editing: true, .. } => InputMode::Text,
            Screen::Questions { editing: false, .. } => InputMode::Navigate,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_intake() {
        let app = App::new();
        assert_eq!(app.screen, Screen::intake());
        assert!(!app.session.is_submitted());
        assert!(app.notice.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn questions_screen_starts_on_technical_top() {
        assert_eq!(
            Screen::questions(),
            Screen::Questions {
                tab: QuestionCategory::Technical,
                cursor: 0,
                editing: false,
            }
        );
    }

    #[test]
    fn input_mode_follows_screen() {
        assert_eq!(Screen::intake().input_mode(), InputMode::Text);
        assert_eq!(Screen::questions().input_mode(), InputMode::Navigate);
        let editing = Screen::Questions {
            tab: QuestionCategory::Behavioral,
            cursor: 2,
            editing: true,
        };
        assert_eq!(editing.input_mode(), InputMode::Text);
    }

    #[test]
    fn screen_default_is_intake() {
        assert_eq!(Screen::default(), Screen::intake());
    }
}
