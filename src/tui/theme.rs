//! TUI color semantics and style constants.
//!
//! Centralized theme definitions. Pure data, consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - Green / yellow / red: easy / medium / hard difficulty badges
//! - Blue: technical category accent, feedback
//! - Magenta: behavioral category accent
//! - Cyan: interactive elements (keybinding hints, focused field)
//! - Dim: de-emphasized (placeholders, unavailable controls)
//! - Green + struck through: solved question

use ratatui::style::{Color, Modifier, Style};

use crate::types::{Difficulty, QuestionCategory};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Easy badge.
pub const STYLE_EASY: Style = Style::new().fg(Color::Green);

/// Medium badge.
pub const STYLE_MEDIUM: Style = Style::new().fg(Color::Yellow);

/// Hard badge.
pub const STYLE_HARD: Style = Style::new().fg(Color::Red);

/// Technical accent bar and tab.
pub const STYLE_TECHNICAL: Style = Style::new().fg(Color::Blue);

/// Behavioral accent bar and tab.
pub const STYLE_BEHAVIORAL: Style = Style::new().fg(Color::Magenta);

/// Completed question title.
pub const STYLE_SOLVED: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::CROSSED_OUT);

/// Feedback heading and body.
pub const STYLE_FEEDBACK: Style = Style::new().fg(Color::Blue);

/// Notices (source errors and the like).
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text, unavailable controls.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused card header.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Selected tab.
pub const STYLE_TAB_SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Border of the focused intake field.
pub const STYLE_FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused intake field.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// LOOKUPS
// ============================================================================

pub fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Easy => STYLE_EASY,
        Difficulty::Medium => STYLE_MEDIUM,
        Difficulty::Hard => STYLE_HARD,
    }
}

pub fn category_style(category: QuestionCategory) -> Style {
    match category {
        QuestionCategory::Technical => STYLE_TECHNICAL,
        QuestionCategory::Behavioral => STYLE_BEHAVIORAL,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_styles_follow_traffic_light() {
        assert_eq!(difficulty_style(Difficulty::Easy).fg, Some(Color::Green));
        assert_eq!(difficulty_style(Difficulty::Medium).fg, Some(Color::Yellow));
        assert_eq!(difficulty_style(Difficulty::Hard).fg, Some(Color::Red));
    }

    #[test]
    fn categories_have_distinct_accents() {
        assert_ne!(
            category_style(QuestionCategory::Technical),
            category_style(QuestionCategory::Behavioral)
        );
    }

    #[test]
    fn solved_style_is_struck_through() {
        assert!(STYLE_SOLVED.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(STYLE_SOLVED.fg, Some(Color::Green));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
