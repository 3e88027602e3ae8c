//! Lexical error type.
//!
//! Scanning has exactly one failure mode: a character that no rule of the
//! pattern table accepts. The error is fatal; the scanner stops at the
//! first one.

use super::token::SourceLocation;
use thiserror::Error;

/// A character the scanner could not classify.
///
/// `location` identifies the offending character itself, not the position
/// after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexer error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl LexError {
    pub(crate) fn invalid_character(ch: char, location: SourceLocation) -> Self {
        Self {
            message: format!("Invalid character: {:?}", ch),
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
