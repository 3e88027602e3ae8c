//! Source code pane rendering with token highlighting
//!
//! The pane colours the source by the lexemes the scanner produced, so what
//! is shown is exactly how the text was classified. The selected token is
//! drawn on a highlighted background, and after a lexical error the
//! offending character is marked and the unscanned remainder is left plain.

use crate::lexer::{LexError, Lexeme};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TAB_WIDTH: usize = 4;

/// Everything the source pane needs to draw one frame.
pub struct SourceRenderData<'a> {
    pub title: &'a str,
    pub source: &'a str,
    pub lexemes: &'a [Lexeme],
    /// Index into `lexemes` of the selected token.
    pub selected: Option<usize>,
    pub error: Option<&'a LexError>,
    pub is_focused: bool,
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to (`None` = centre on first draw)
    pub target_line_row: Option<usize>,
}

fn lexeme_style(lexeme: &Lexeme) -> Style {
    match lexeme {
        Lexeme::Token { token, .. } => {
            let style = Style::default().fg(DEFAULT_THEME.token_color(token.kind));
            if token.kind == crate::lexer::TokenKind::Keyword {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        }
        Lexeme::Trivia { kind, .. } => {
            Style::default().fg(DEFAULT_THEME.trivia_color(*kind))
        }
    }
}

/// Append `text` to `lines`, starting a new line at every newline.
fn push_text(lines: &mut Vec<Vec<Span<'static>>>, text: &str, style: Style) {
    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        if segment.is_empty() {
            continue;
        }
        let expanded = segment.replace('\t', &" ".repeat(TAB_WIDTH));
        if let Some(line) = lines.last_mut() {
            line.push(Span::styled(expanded, style));
        }
    }
}

/// Split the source into styled lines, one `Vec<Span>` per source line.
pub fn highlight_source(data: &SourceRenderData) -> Vec<Vec<Span<'static>>> {
    let mut lines = vec![Vec::new()];
    let mut consumed = 0;

    for (idx, lexeme) in data.lexemes.iter().enumerate() {
        let mut style = lexeme_style(lexeme);
        if data.selected == Some(idx) {
            style = style
                .bg(DEFAULT_THEME.selection_bg)
                .add_modifier(Modifier::BOLD);
        }
        push_text(&mut lines, lexeme.raw(), style);
        consumed += lexeme.raw().len();
    }

    let rest = data.source.get(consumed..).unwrap_or_default();
    if data.error.is_some() {
        // The scanner stopped right before the offending character.
        let bad_len = rest.chars().next().map_or(0, char::len_utf8);
        push_text(
            &mut lines,
            &rest[..bad_len],
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        push_text(&mut lines, &rest[bad_len..], Style::default());
    } else {
        push_text(&mut lines, rest, Style::default());
    }

    // A trailing newline does not start a visible line.
    if data.source.ends_with('\n') && lines.len() > 1 {
        lines.pop();
    }
    lines
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: &SourceRenderData,
    current_line: usize,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if data.is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = highlight_source(data);
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        let target_line_idx = current_line - 1;
        scroll_state.offset = target_line_idx.saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let error_line = data.error.map(|e| e.location.line);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, spans)| {
            let line_num = idx + 1;
            let num_style = if error_line == Some(line_num) {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if line_num == current_line {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut final_spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            if line_num == current_line {
                final_spans.extend(spans.into_iter().map(|span| {
                    let style = Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .patch(span.style);
                    span.style(style)
                }));
            } else {
                final_spans.extend(spans);
            }
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
