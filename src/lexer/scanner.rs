//! The scanning engine.
//!
//! [`Scanner`] is a pull-based, forward-only cursor over one source string.
//! Each pull runs one pass of the pattern table at the current position and
//! yields a token, end of input, or the first lexical error. After an error
//! or end of input the scanner is exhausted and keeps returning `None`.

use super::cursor::Cursor;
use super::error::LexError;
use super::keywords;
use super::rules::{self, Lookahead, Output};
use super::token::{Lexeme, SourceLocation, Token, TokenKind};
use tracing::{debug, trace};

/// Lexer for C source text.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    lookahead: Lookahead,
    emitted: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            lookahead: Lookahead::default(),
            emitted: 0,
            finished: false,
        }
    }

    /// Match and consume the next lexeme, trivia included.
    ///
    /// Returns `None` once input is exhausted or an error has been returned.
    pub fn next_lexeme(&mut self) -> Option<Result<Lexeme, LexError>> {
        if self.finished {
            return None;
        }

        // The location is taken before advancing so tokens and errors both
        // point at their first character.
        let location = self.cursor.location();
        let Some((rule, len)) = rules::select(self.cursor.rest(), &mut self.lookahead) else {
            self.finished = true;
            debug!(
                tokens = self.emitted,
                bytes = self.cursor.position(),
                "scan complete"
            );
            return None;
        };
        let text = self.cursor.advance(len);

        let lexeme = match rule.output() {
            Output::Trivia(kind) => Lexeme::Trivia {
                kind,
                text: text.to_string(),
                location,
            },
            Output::Token(kind) => {
                let token = Token::new(classify(kind, text), token_text(kind, text), location);
                trace!(kind = %token.kind, text = %token.text, %location, "token");
                self.emitted += 1;
                Lexeme::Token {
                    token,
                    raw: text.to_string(),
                }
            }
            Output::Invalid => {
                self.finished = true;
                let ch = text.chars().next().unwrap_or_default();
                let err = LexError::invalid_character(ch, location);
                debug!(%location, "lexical error: {}", err.message);
                return Some(Err(err));
            }
        };

        Some(Ok(lexeme))
    }

    /// Iterate over every lexeme, including whitespace and comments.
    pub fn lexemes(self) -> Lexemes<'src> {
        Lexemes { scanner: self }
    }

    /// Location of the next unconsumed character.
    pub fn location(&self) -> SourceLocation {
        self.cursor.location()
    }

    /// Whether the scanner has stopped producing output.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Identifiers with a reserved spelling become keywords.
fn classify(kind: TokenKind, text: &str) -> TokenKind {
    if kind == TokenKind::Id && keywords::is_reserved(text) {
        TokenKind::Keyword
    } else {
        kind
    }
}

/// Preprocessor lines are reported without surrounding whitespace.
fn token_text(kind: TokenKind, text: &str) -> &str {
    if kind == TokenKind::Preprocessor {
        text.trim()
    } else {
        text
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_lexeme()? {
                Ok(lexeme) => {
                    if let Some(token) = lexeme.into_token() {
                        return Some(Ok(token));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Iterator over all lexemes of a [`Scanner`]; see [`Scanner::lexemes`].
pub struct Lexemes<'src> {
    scanner: Scanner<'src>,
}

impl Iterator for Lexemes<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_lexeme()
    }
}

impl std::iter::FusedIterator for Lexemes<'_> {}

/// Tokenize an entire source string, stopping at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}

/// Like [`tokenize`], but keeps whitespace and comments.
pub fn lex_all(source: &str) -> Result<Vec<Lexeme>, LexError> {
    Scanner::new(source).lexemes().collect()
}
