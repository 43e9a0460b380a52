//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.
//!
//! Card text is wrapped here rather than by `Paragraph`, so the line
//! index of every card is known and the scroll offset can keep the
//! focused card on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::board::Board;
use crate::card::CardState;
use crate::session::{IntakeField, IntakeForm};
use crate::types::{Question, QuestionCategory};

use super::state::{App, Screen};
use super::theme;

/// Caret drawn at the end of a text box that has input focus.
const CARET: &str = "▏";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title, content, notice, help
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // notice
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);

    if let Some(notice) = &app.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.as_str(), theme::STYLE_WARNING)),
            chunks[2],
        );
    }

    frame.render_widget(render_help(&app.screen), chunks[3]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Intake { focus } => {
            render_intake(&app.session.form, *focus, frame, content_area);
        }
        Screen::Questions {
            tab,
            cursor,
            editing,
        } => {
            if let Some(board) = &app.session.board {
                render_questions(board, *tab, *cursor, *editing, frame, content_area);
            }
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Intake { .. } => "Interview Prep",
        Screen::Questions { .. } => "Interview Prep · Your questions",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

/// Help line showing available keybindings for the current screen.
///
/// Every variant fits in 80 columns. Card commands are listed on the card.
fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Intake { .. } => "[Tab] switch field  [Ctrl+S] generate questions  [Ctrl+C] quit",
        Screen::Questions { editing: true, .. } => "[Esc] stop editing  [Ctrl+S] submit answer",
        Screen::Questions { editing: false, .. } => {
            "[j/k] move  [Enter] expand  [i] answer  [Tab/1/2] tab  [r] reset  [q] quit"
        }
    }
}

fn render_help(screen: &Screen) -> Paragraph<'static> {
    Paragraph::new(Span::styled(help_text(screen), theme::STYLE_HELP))
}

/// Greedy word wrap on terminal columns.
///
/// Explicit newlines are kept; words wider than `width` are split. Wide
/// characters (CJK) count as two columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for mut word in paragraph.split_whitespace() {
            // Hard-split words that can never fit.
            while word.width() > width {
                let (head, rest) = split_at_width(word, width);
                if rest.is_empty() {
                    break;
                }
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                lines.push(head.to_string());
                word = rest;
            }

            let word_width = word.width();
            let needed = if current_width == 0 {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if current_width > 0 && needed > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current_width += word_width;
            current.push_str(word);
        }

        lines.push(current);
    }

    lines
}

/// Split `word` after as many characters as fit in `width` columns.
///
/// Always takes at least one character.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            return word.split_at(i);
        }
        used += w;
    }
    (word, "")
}

/// Indent every wrapped line of `text` with `prefix`, styled as given.
fn indented(text: &str, prefix: &'static str, width: usize, style: Style) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(prefix.width());
    wrap_text(text, inner)
        .into_iter()
        .map(|l| Line::from(vec![Span::styled(prefix, theme::STYLE_DIM), Span::styled(l, style)]))
        .collect()
}

// ============================================================================
// SCREEN: INTAKE
// ============================================================================

fn render_intake(form: &IntakeForm, focus: IntakeField, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40), // job description
        Constraint::Min(3),         // résumé
        Constraint::Length(1),      // submit status
    ])
    .split(area);

    render_field(
        " Job description ",
        "Paste the job description...",
        form.field(IntakeField::JobDescription),
        focus == IntakeField::JobDescription,
        frame,
        chunks[0],
    );
    render_field(
        " Your résumé ",
        "Paste your résumé...",
        form.field(IntakeField::Resume),
        focus == IntakeField::Resume,
        frame,
        chunks[1],
    );

    let status = if form.can_submit() {
        Line::from(vec![
            Span::styled("  [Ctrl+S] ", theme::STYLE_INTERACTIVE),
            Span::raw("Generate interview questions"),
        ])
    } else {
        Line::from(Span::styled(
            "  Generate interview questions (fill in both fields first)",
            theme::STYLE_DIM,
        ))
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
}

fn render_field(
    title: &'static str,
    placeholder: &'static str,
    text: &str,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border = if focused {
        theme::STYLE_FOCUSED_BORDER
    } else {
        theme::STYLE_BORDER
    };
    let block = Block::bordered().title(title).border_style(border);
    let inner = block.inner(area);

    let mut lines: Vec<Line> = if text.is_empty() {
        vec![Line::from(Span::styled(placeholder, theme::STYLE_DIM))]
    } else {
        wrap_text(text, inner.width.saturating_sub(1) as usize)
            .into_iter()
            .map(Line::from)
            .collect()
    };
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CARET, theme::STYLE_INTERACTIVE));
        }
    }

    // Keep the end of the text (where typing happens) in view.
    let scroll_offset = lines.len().saturating_sub(inner.height as usize);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: QUESTIONS
// ============================================================================

fn render_questions(
    board: &Board,
    tab: QuestionCategory,
    cursor: usize,
    editing: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // tabs
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // cards
    ])
    .split(area);

    frame.render_widget(render_tabs(board, tab), chunks[0]);

    let width = chunks[2].width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_span = (0, 0);

    for (i, (question, card)) in board
        .questions(tab)
        .iter()
        .zip(board.cards(tab))
        .enumerate()
    {
        let focused = i == cursor;
        let start = lines.len();
        lines.extend(card_lines(question, card, tab, focused, focused && editing, width));
        if focused {
            focused_span = (start, lines.len());
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  No {} questions.", tab.label().to_lowercase()),
            theme::STYLE_DIM,
        )));
    }

    // Scroll so the focused card fits, preferring its header when it does not.
    let visible_height = chunks[2].height as usize;
    let (start, end) = focused_span;
    let scroll_offset = end.saturating_sub(visible_height).min(start);

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[2]);
}

fn render_tabs(board: &Board, selected: QuestionCategory) -> Tabs<'static> {
    let titles: Vec<Line> = QuestionCategory::ALL
        .iter()
        .map(|&category| {
            let progress = board.progress(category);
            Line::from(vec![
                Span::styled("▌", theme::category_style(category)),
                Span::raw(format!(
                    "{} {} ({}/{} solved)",
                    category.index() + 1,
                    category.label(),
                    progress.solved,
                    progress.total
                )),
            ])
        })
        .collect();

    Tabs::new(titles)
        .select(selected.index())
        .highlight_style(theme::STYLE_TAB_SELECTED)
        .divider(" ")
}

/// Lines for one question card.
fn card_lines(
    question: &Question,
    card: &CardState,
    category: QuestionCategory,
    focused: bool,
    editing: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Header: accent, chevron, title, difficulty badge
    let chevron = if card.expanded() { "▾ " } else { "▸ " };
    let mut header = vec![
        Span::styled("▌ ", theme::category_style(category)),
        Span::raw(chevron),
    ];
    if card.solved() {
        header.push(Span::styled("✓ ", theme::STYLE_SOLVED));
        header.push(Span::styled(question.text.clone(), theme::STYLE_SOLVED));
    } else {
        header.push(Span::styled(question.text.clone(), theme::STYLE_IMPORTANT));
    }
    header.push(Span::raw("  "));
    header.push(Span::styled(
        format!("[{}]", question.difficulty),
        theme::difficulty_style(question.difficulty),
    ));

    let header = if focused {
        Line::from(header).style(theme::STYLE_CURSOR)
    } else {
        Line::from(header)
    };
    lines.push(header);

    if !card.expanded() {
        return lines;
    }

    if card.show_answer() {
        lines.push(Line::from(Span::styled("    Model answer:", theme::STYLE_IMPORTANT)));
        lines.extend(indented(&question.model_answer, "    ", width, Style::new()));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("[a] ", theme::STYLE_INTERACTIVE),
            Span::raw("back to your answer"),
        ]));
        return lines;
    }

    // Answer box
    let mut label = vec![Span::styled("    Your answer", theme::STYLE_IMPORTANT)];
    if !card.answer_editable() {
        label.push(Span::styled(" (locked)", theme::STYLE_DIM));
    } else if editing {
        label.push(Span::styled(" (editing)", theme::STYLE_INTERACTIVE));
    }
    label.push(Span::raw(":"));
    lines.push(Line::from(label));

    let answer_style = if card.answer_editable() {
        Style::new()
    } else {
        theme::STYLE_DIM
    };
    if card.user_answer().is_empty() && !editing {
        lines.push(Line::from(vec![
            Span::styled("    │ ", theme::STYLE_DIM),
            Span::styled("Type your answer... ([i] to start)", theme::STYLE_DIM),
        ]));
    } else {
        let mut answer = indented(card.user_answer(), "    │ ", width.saturating_sub(1), answer_style);
        if editing {
            if let Some(last) = answer.last_mut() {
                last.push_span(Span::styled(CARET, theme::STYLE_INTERACTIVE));
            }
        }
        lines.extend(answer);
    }

    if let Some(feedback) = card.feedback() {
        lines.push(Line::from(Span::styled("    Feedback:", theme::STYLE_FEEDBACK)));
        lines.extend(indented(feedback, "    ", width, theme::STYLE_FEEDBACK));
    }

    // Controls: hidden when unavailable for good, dimmed when not yet enabled
    let control = |key: &'static str, label: &'static str, enabled: bool| {
        let (key_style, label_style) = if enabled {
            (theme::STYLE_INTERACTIVE, Style::new())
        } else {
            (theme::STYLE_DIM, theme::STYLE_DIM)
        };
        [Span::styled(key, key_style), Span::styled(label, label_style)]
    };

    let mut controls = vec![Span::raw("    ")];
    if card.submit_visible() {
        controls.extend(control("[s] ", "submit  ", card.can_submit()));
    }
    controls.extend(control("[a] ", "model answer  ", true));
    if card.solve_visible() {
        controls.extend(control("[m] ", "mark solved", card.can_mark_solved()));
    }
    lines.push(Line::from(controls));

    lines
}

// ============================================================================
// TESTS
// ============================================================================
