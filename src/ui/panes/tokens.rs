//! Token list pane: one row per token with its position and category.

use crate::lexer::{LexError, Token};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TokensRenderData<'a> {
    pub tokens: &'a [&'a Token],
    pub selected: usize,
    pub error: Option<&'a LexError>,
    pub is_focused: bool,
}

#[derive(Debug, Default)]
pub struct TokensScrollState {
    pub offset: usize,
}

impl TokensScrollState {
    /// Scroll just enough to keep `selected` among the `visible` rows.
    pub fn follow(&mut self, selected: usize, visible: usize) {
        let visible = visible.max(1);
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + visible {
            self.offset = selected + 1 - visible;
        }
    }
}

fn token_row(token: &Token, is_selected: bool) -> Line<'static> {
    let mut kind_style = Style::default().fg(DEFAULT_THEME.token_color(token.kind));
    let mut text_style = Style::default().fg(DEFAULT_THEME.fg);
    let mut pos_style = Style::default().fg(DEFAULT_THEME.comment);
    if is_selected {
        kind_style = kind_style
            .bg(DEFAULT_THEME.selection_bg)
            .add_modifier(Modifier::BOLD);
        text_style = text_style.bg(DEFAULT_THEME.selection_bg);
        pos_style = pos_style.bg(DEFAULT_THEME.selection_bg);
    }

    Line::from(vec![
        Span::styled(
            format!("{:>5}:{:<4}", token.location.line, token.location.column),
            pos_style,
        ),
        Span::styled(format!(" {:<13}", token.kind.as_str()), kind_style),
        Span::styled(format!("{:?}", token.text), text_style),
    ])
}

/// Render the token list pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    data: &TokensRenderData,
    scroll_state: &mut TokensScrollState,
) {
    let border_style = if data.is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Tokens ({}) ", data.tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll_state.follow(data.selected, visible_height);

    let mut lines: Vec<Line> = data
        .tokens
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, token)| token_row(token, idx == data.selected))
        .collect();

    if let Some(err) = data.error {
        if lines.len() < visible_height {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:>5}:{:<4} ERROR         {}",
                    err.location.line, err.location.column, err.message
                ),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
