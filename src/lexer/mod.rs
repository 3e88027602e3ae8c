//! C lexical analysis
//!
//! This module turns C source text into a stream of classified, positioned
//! tokens:
//! - [`token`]: [`Token`], [`TokenKind`] and the trivia-preserving [`Lexeme`]
//! - [`rules`]: the ordered pattern table and its matchers
//! - [`cursor`]: line/column bookkeeping
//! - [`scanner`]: the pull-based [`Scanner`] and the [`tokenize`] helper
//! - [`keywords`]: the reserved-word set
//!
//! # Matching
//!
//! Rules are tried in declaration order and the first one that matches wins.
//! Whitespace, newlines and comments are consumed without producing tokens.
//! Preprocessor lines are kept verbatim as single tokens; nothing is
//! expanded.
//!
//! # Errors
//!
//! A character no rule accepts stops the scan with a [`LexError`] located at
//! that character. Unterminated string and character literals surface this
//! way, at their opening quote. An unterminated block comment is not an
//! error: its `/` and `*` lex as operators.

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod rules;
pub mod scanner;
pub mod token;

pub use error::LexError;
pub use scanner::{lex_all, tokenize, Lexemes, Scanner};
pub use token::{Lexeme, SourceLocation, Token, TokenKind, TriviaKind};
