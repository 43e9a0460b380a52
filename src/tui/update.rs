//! State transitions: (Screen, Action, Session) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).
//!
//! Form text and card state are mutated in place on the session; screen
//! navigation is expressed through the returned [`Transition`].

use crate::card::CardState;
use crate::feedback::FeedbackProvider;
use crate::session::{IntakeField, Session};
use crate::types::QuestionCategory;

use super::state::{Action, Effect, Screen, Transition};

/// State transition function.
///
/// Given the current screen, an action, the session, and the feedback
/// provider, produces the next transition. The effects boundary
/// interprets the result.
pub fn update(
    screen: Screen,
    action: &Action,
    session: &mut Session,
    feedback: &dyn FeedbackProvider,
) -> Transition {
    match screen {
        Screen::Intake { focus } => update_intake(focus, action, session),
        Screen::Questions {
            tab,
            cursor,
            editing: true,
        } => update_editing(tab, cursor, action, session, feedback),
        Screen::Questions {
            tab,
            cursor,
            editing: false,
        } => update_questions(tab, cursor, action, session, feedback),
    }
}

// ============================================================================
// INTAKE
// ============================================================================

/// Intake: typing into the focused field, field switching, submit.
fn update_intake(focus: IntakeField, action: &Action, session: &mut Session) -> Transition {
    let form = &mut session.form;
    match action {
        Action::Insert(c) => form.insert_char(focus, *c),
        Action::Newline => form.insert_char(focus, '\n'),
        Action::Paste(text) => form.insert_str(focus, text),
        Action::Backspace => form.backspace(focus),
        Action::NextField => {
            return Transition::Screen(Screen::Intake { focus: focus.next() });
        }
        Action::Submit => {
            if form.can_submit() {
                return Transition::Effect(Effect::GenerateQuestions);
            }
        }
        Action::Quit => return Transition::Quit,
        _ => {}
    }
    Transition::Screen(Screen::Intake { focus })
}

// ============================================================================
// QUESTIONS
// ============================================================================

/// Run `f` on the focused card if it exists.
fn with_card<R>(
    session: &mut Session,
    tab: QuestionCategory,
    cursor: usize,
    f: impl FnOnce(&mut CardState) -> R,
) -> Option<R> {
    session
        .board
        .as_mut()
        .and_then(|board| board.card_mut(tab, cursor))
        .map(f)
}

/// True if the focused card shows its answer-entry view.
fn entry_view_open(session: &Session, tab: QuestionCategory, cursor: usize) -> bool {
    session
        .board
        .as_ref()
        .and_then(|board| board.card(tab, cursor))
        .is_some_and(|card| card.expanded() && !card.show_answer())
}

/// Questions, navigation mode: cursor, tabs, and card commands.
fn update_questions(
    tab: QuestionCategory,
    cursor: usize,
    action: &Action,
    session: &mut Session,
    feedback: &dyn FeedbackProvider,
) -> Transition {
    let Some(len) = session.board.as_ref().map(|b| b.len(tab)) else {
        // No board: nothing to show, fall back to the form.
        return Transition::Screen(Screen::intake());
    };
    let stay = |cursor| {
        Transition::Screen(Screen::Questions {
            tab,
            cursor,
            editing: false,
        })
    };

    match action {
        Action::MoveUp => stay(cursor.saturating_sub(1)),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            stay(new_cursor)
        }
        Action::ToggleExpand => {
            with_card(session, tab, cursor, |card| card.toggle_expanded());
            stay(cursor)
        }
        Action::StartEditing => {
            let editable = with_card(session, tab, cursor, |card| {
                if !card.expanded() {
                    card.toggle_expanded();
                }
                !card.show_answer() && card.answer_editable()
            })
            .unwrap_or(false);
            Transition::Screen(Screen::Questions {
                tab,
                cursor,
                editing: editable,
            })
        }
        Action::Submit => {
            if entry_view_open(session, tab, cursor) {
                if let Some(board) = session.board.as_mut() {
                    board.submit_answer(tab, cursor, feedback);
                }
            }
            stay(cursor)
        }
        Action::ToggleModelAnswer => {
            with_card(session, tab, cursor, |card| {
                if card.expanded() {
                    card.toggle_model_answer();
                }
            });
            stay(cursor)
        }
        Action::MarkSolved => {
            if entry_view_open(session, tab, cursor) {
                with_card(session, tab, cursor, |card| card.mark_solved());
            }
            stay(cursor)
        }
        Action::Back => {
            with_card(session, tab, cursor, |card| {
                if card.show_answer() {
                    card.hide_model_answer();
                } else if card.expanded() {
                    card.toggle_expanded();
                }
            });
            stay(cursor)
        }
        Action::NextTab => Transition::Screen(Screen::questions_tab(tab.other())),
        Action::SelectTab(n) => match *n {
            1 => Transition::Screen(Screen::questions_tab(QuestionCategory::Technical)),
            2 => Transition::Screen(Screen::questions_tab(QuestionCategory::Behavioral)),
            _ => stay(cursor),
        },
        Action::Reset => {
            session.reset_form();
            Transition::Screen(Screen::intake())
        }
        Action::Quit => Transition::Quit,
        _ => stay(cursor),
    }
}

/// Questions, editing mode: keystrokes go to the focused answer box.
fn update_editing(
    tab: QuestionCategory,
    cursor: usize,
    action: &Action,
    session: &mut Session,
    feedback: &dyn FeedbackProvider,
) -> Transition {
    let editing = |editing| {
        Transition::Screen(Screen::Questions {
            tab,
            cursor,
            editing,
        })
    };

    if !entry_view_open(session, tab, cursor) {
        return editing(false);
    }

    match action {
        Action::Insert(c) => {
            with_card(session, tab, cursor, |card| card.insert_char(*c));
            editing(true)
        }
        Action::Newline => {
            with_card(session, tab, cursor, |card| card.insert_char('\n'));
            editing(true)
        }
        Action::Paste(text) => {
            with_card(session, tab, cursor, |card| card.insert_str(text));
            editing(true)
        }
        Action::Backspace => {
            with_card(session, tab, cursor, |card| card.backspace());
            editing(true)
        }
        Action::Submit => {
            let submitted = session
                .board
                .as_mut()
                .is_some_and(|board| board.submit_answer(tab, cursor, feedback));
            editing(!submitted)
        }
        Action::Back => editing(false),
        Action::Quit => Transition::Quit,
        _ => editing(true),
    }
}

// ============================================================================
// TESTS
// ============================================================================
