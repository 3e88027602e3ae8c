use crate::lexer::{TokenKind, TriviaKind};
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub preprocessor: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub selection_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(166, 227, 161),         // Green for strings and chars
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    preprocessor: Color::Rgb(245, 194, 231),   // Pink for directives
    operator: Color::Rgb(148, 226, 213),       // Teal for operators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    selection_bg: Color::Rgb(88, 91, 112),
};

impl Theme {
    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Preprocessor => self.preprocessor,
            TokenKind::String | TokenKind::Char => self.string,
            TokenKind::Float | TokenKind::Integer => self.number,
            TokenKind::Keyword => self.keyword,
            TokenKind::Id => self.fg,
            TokenKind::Operator => self.operator,
            kind if kind.is_punctuation() => self.primary,
            _ => self.fg,
        }
    }

    pub fn trivia_color(&self, kind: TriviaKind) -> Color {
        match kind {
            TriviaKind::BlockComment | TriviaKind::LineComment => self.comment,
            TriviaKind::Whitespace | TriviaKind::Newline => self.fg,
        }
    }
}

/// Terminal-output counterpart of a theme colour.
pub fn to_crossterm(color: Color) -> crossterm::style::Color {
    match color {
        Color::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
        _ => crossterm::style::Color::Reset,
    }
}
