//! Plain-text token listing for the command line.
//!
//! Each token is printed on its own line as
//! `Token(KIND, "text", line=L, col=C)`. When colour is enabled the category
//! name is styled with the browser's palette.

use crate::lexer::{LexError, Lexeme, Token};
use crate::ui::theme::{to_crossterm, DEFAULT_THEME};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Write one token per line.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], color: bool) -> io::Result<()> {
    for token in tokens {
        write_token(out, token, color)?;
    }
    Ok(())
}

/// Write every lexeme, trivia included, one per line.
pub fn write_lexemes<W: Write>(out: &mut W, lexemes: &[Lexeme], color: bool) -> io::Result<()> {
    for lexeme in lexemes {
        match lexeme {
            Lexeme::Token { token, .. } => write_token(out, token, color)?,
            Lexeme::Trivia { kind, .. } if color => {
                let styled = lexeme
                    .to_string()
                    .with(to_crossterm(DEFAULT_THEME.trivia_color(*kind)));
                writeln!(out, "{}", styled)?;
            }
            Lexeme::Trivia { .. } => writeln!(out, "{}", lexeme)?,
        }
    }
    Ok(())
}

fn write_token<W: Write>(out: &mut W, token: &Token, color: bool) -> io::Result<()> {
    if !color {
        return writeln!(out, "{}", token);
    }

    let kind = token
        .kind
        .as_str()
        .with(to_crossterm(DEFAULT_THEME.token_color(token.kind)))
        .bold();
    writeln!(
        out,
        "Token({}, {:?}, line={}, col={})",
        kind, token.text, token.location.line, token.location.column
    )
}

/// Write a lexical error the way the CLI reports it.
pub fn write_error<W: Write>(out: &mut W, err: &LexError, color: bool) -> io::Result<()> {
    if color {
        let styled = err.to_string().with(to_crossterm(DEFAULT_THEME.error)).bold();
        writeln!(out, "{}", styled)
    } else {
        writeln!(out, "{}", err)
    }
}
