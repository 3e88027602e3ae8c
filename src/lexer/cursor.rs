//! Position tracking over the source text.

use super::token::SourceLocation;

/// Scanner position: a byte offset plus the 1-based line and column of the
/// next unconsumed character.
///
/// [`Cursor::advance`] is the only mutator, so `line`/`column` always agree
/// with `position`.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Consume the next `len` bytes and return them.
    ///
    /// Text without a newline moves the column by its character count. Text
    /// containing newlines moves the line by the newline count and resets the
    /// column to one past the length of the text after the last newline.
    ///
    /// `len` must land on a character boundary; rule matchers only ever
    /// report such lengths.
    pub fn advance(&mut self, len: usize) -> &'src str {
        let end = (self.position + len).min(self.source.len());
        let text = &self.source[self.position..end];

        match text.rfind('\n') {
            None => self.column += text.chars().count(),
            Some(last) => {
                self.line += text.bytes().filter(|&b| b == b'\n').count();
                self.column = text[last + 1..].chars().count() + 1;
            }
        }

        self.position = end;
        text
    }
}
