//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Everything runs on one thread. The loop blocks on the next terminal
//! event, maps it to an Action, and hands it to the transition function.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::bank::QuestionSource;
use crate::error::Result;
use crate::feedback::FeedbackProvider;

use super::state::{Action, App, Effect, InputMode, Screen, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Text mode sends printable keys to the focused text box; navigate mode
/// treats them as commands. Returns None for keys with no meaning.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, Ctrl+S always submits
    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Submit),
            _ => None,
        };
    }

    match mode {
        InputMode::Text => map_text_key(key),
        InputMode::Navigate => map_navigate_key(key),
    }
}

fn map_text_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Enter => Some(Action::Newline),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::NextField),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

/// Map a bracketed paste to an Action.
///
/// Pastes only land in a text box; line endings are normalised to `\n`.
pub fn map_paste(text: &str, mode: InputMode) -> Option<Action> {
    match mode {
        InputMode::Text if !text.is_empty() => {
            Some(Action::Paste(text.replace("\r\n", "\n").replace('\r', "\n")))
        }
        _ => None,
    }
}

fn map_navigate_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleExpand),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::NextTab),
        KeyCode::Char(c @ '1'..='2') => Some(Action::SelectTab(c as u8 - b'0')),

        // Card commands
        KeyCode::Char('i') => Some(Action::StartEditing),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Char('a') => Some(Action::ToggleModelAnswer),
        KeyCode::Char('m') => Some(Action::MarkSolved),

        // Session
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    // Without this a pasted tab would arrive as a Tab key press.
    io::stdout().execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits, returning the final app state.
///
/// `source` answers form submissions; `feedback` answers card submissions.
pub fn run(
    app: App,
    source: &dyn QuestionSource,
    feedback: &dyn FeedbackProvider,
) -> Result<App> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, app, source, feedback);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    source: &dyn QuestionSource,
    feedback: &dyn FeedbackProvider,
) -> Result<App> {
    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let mode = app.screen.input_mode();
        let action = match event::read()? {
            // Windows reports releases too; act on presses only.
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, mode),
            Event::Paste(text) => map_paste(&text, mode),
            _ => continue, // ignore mouse, resize (redrawn above), etc.
        };

        if let Some(action) = action {
            dispatch(&mut app, &action, source, feedback);
        }
    }

    Ok(app)
}

/// Apply one action to the app: transition, then any requested effect.
pub fn dispatch(
    app: &mut App,
    action: &Action,
    source: &dyn QuestionSource,
    feedback: &dyn FeedbackProvider,
) {
    let screen = std::mem::take(&mut app.screen);
    let transition = update(screen.clone(), action, &mut app.session, feedback);

    match transition {
        Transition::Screen(new_screen) => {
            app.screen = new_screen;
        }
        Transition::Quit => {
            app.screen = screen;
            app.should_quit = true;
        }
        Transition::Effect(effect) => {
            app.screen = screen;
            handle_effect(effect, app, source);
        }
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a transition.
fn handle_effect(effect: Effect, app: &mut App, source: &dyn QuestionSource) {
    match effect {
        Effect::GenerateQuestions => match app.session.submit_form(source) {
            Ok(true) => {
                debug!("switching to question view");
                app.notice = None;
                app.screen = Screen::questions();
            }
            Ok(false) => {}
            Err(e) => {
                error!("question source failed: {}", e);
                app.notice = Some(format!("Could not generate questions: {}", e));
            }
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
