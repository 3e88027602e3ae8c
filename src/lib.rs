//! # Introduction
//!
//! cscan turns C source text into a stream of classified, positioned tokens.
//! It is the front end of a compiler pipeline and nothing more: it does not
//! expand macros, parse, or check semantics.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → printer / token browser
//! ```
//!
//! 1. [`lexer`] — the ordered pattern table, the position cursor and the
//!    pull-based [`lexer::Scanner`].
//! 2. [`output`] — one-token-per-line printing for the command line.
//! 3. [`ui`] — ratatui-based token browser; not part of the stable library API.
//! 4. [`cli`] and [`logging`] — option parsing and tracing setup for the binary.
//!
//! ## Example
//!
//! ```
//! use cscan::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x;\n").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
//! ```

pub mod cli;
pub mod lexer;
pub mod logging;
pub mod output;
pub mod ui;
