//! Token and lexeme types produced by the [`Scanner`](super::Scanner).
//!
//! A [`Token`] is a classified, positioned slice of the source. A [`Lexeme`]
//! is anything the scanner consumed, including the whitespace and comments
//! that never reach the token stream.

use std::fmt;

/// A 1-based line/column pair identifying the first character of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token categories emitted by the scanner.
///
/// This set is closed: downstream tools match on the upper-case names
/// returned by [`TokenKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Preprocessor,
    String,
    Char,
    Float,
    Integer,
    Keyword,
    Id,
    Operator,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
}

impl TokenKind {
    /// Upper-case category name as printed by the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Float => "FLOAT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Id => "ID",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Dot => "DOT",
        }
    }

    /// Whether this is one of the single-character punctuator categories.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon
                | TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Dot
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, positioned slice of source text.
///
/// `text` is the matched substring verbatim: quotes and escapes are kept for
/// string and character literals, and preprocessor lines are trimmed of
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, line={}, col={})",
            self.kind, self.text, self.location.line, self.location.column
        )
    }
}

/// Categories of consumed text that never reach the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    Newline,
    BlockComment,
    LineComment,
}

impl TriviaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriviaKind::Whitespace => "WHITESPACE",
            TriviaKind::Newline => "NEWLINE",
            TriviaKind::BlockComment => "BLOCK_COMMENT",
            TriviaKind::LineComment => "LINE_COMMENT",
        }
    }
}

impl fmt::Display for TriviaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful match of the pattern table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// A significant token. `raw` is the exact consumed slice, which differs
    /// from `token.text` only for preprocessor lines with trailing whitespace.
    Token { token: Token, raw: String },
    Trivia {
        kind: TriviaKind,
        text: String,
        location: SourceLocation,
    },
}

impl Lexeme {
    /// The exact text consumed from the source for this lexeme.
    pub fn raw(&self) -> &str {
        match self {
            Lexeme::Token { raw, .. } => raw,
            Lexeme::Trivia { text, .. } => text,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Lexeme::Token { token, .. } => token.location,
            Lexeme::Trivia { location, .. } => *location,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Lexeme::Token { token, .. } => Some(token),
            Lexeme::Trivia { .. } => None,
        }
    }

    pub fn into_token(self) -> Option<Token> {
        match self {
            Lexeme::Token { token, .. } => Some(token),
            Lexeme::Trivia { .. } => None,
        }
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self, Lexeme::Trivia { .. })
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Token { token, .. } => fmt::Display::fmt(token, f),
            Lexeme::Trivia {
                kind,
                text,
                location,
            } => write!(
                f,
                "Trivia({}, {:?}, line={}, col={})",
                kind, text, location.line, location.column
            ),
        }
    }
}
