//! Command-line options and the errors the binary reports.
//!
//! ```text
//! cscan [OPTIONS] <file.c>
//!
//!   --browse     open the interactive token browser
//!   --trivia     also print whitespace and comment lexemes
//!   --no-color   disable coloured output (as does NO_COLOR)
//!   -h, --help   show this message
//! ```

use crate::lexer::LexError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: cscan [OPTIONS] <file.c>

Options:
  --browse     Open the interactive token browser
  --trivia     Also print whitespace and comment lexemes
  --no-color   Disable coloured output (also honours NO_COLOR)
  -h, --help   Show this message

Set CSCAN_LOG (e.g. CSCAN_LOG=cscan=trace) to enable diagnostic logging.";

/// How token output is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print one token per line.
    Print,
    /// Print every lexeme, including whitespace and comments.
    PrintTrivia,
    /// Open the TUI token browser.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub mode: Mode,
    pub color: bool,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io { .. }
            | CliError::Lex(_)
            | CliError::Output(_)
            | CliError::Terminal(_) => 1,
        }
    }
}

/// Map the result of writing to stdout. A reader that went away early
/// (`cscan f.c | head`) is not a failure.
pub fn output_result(result: io::Result<()>) -> Result<(), CliError> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(CliError::Output),
    }
}

/// Parse arguments (without the program name).
///
/// `no_color_env` is whether `NO_COLOR` is set; it is passed in so parsing
/// stays independent of the process environment.
pub fn parse_args<I>(args: I, no_color_env: bool) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut path = None;
    let mut browse = false;
    let mut trivia = false;
    let mut color = !no_color_env;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--browse" => browse = true,
            "--trivia" => trivia = true,
            "--no-color" => color = false,
            opt if opt.starts_with('-') && opt.len() > 1 => {
                return Err(CliError::Usage(format!("unknown option '{}'", opt)));
            }
            _ => {
                if path.replace(PathBuf::from(&arg)).is_some() {
                    return Err(CliError::Usage(format!(
                        "unexpected extra argument '{}'",
                        arg
                    )));
                }
            }
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("no input file provided".to_string()))?;
    let mode = match (browse, trivia) {
        (true, true) => {
            return Err(CliError::Usage(
                "--browse and --trivia cannot be combined".to_string(),
            ));
        }
        (true, false) => Mode::Browse,
        (false, true) => Mode::PrintTrivia,
        (false, false) => Mode::Print,
    };

    Ok(Command::Run(Options { path, mode, color }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_file() {
        let cmd = parse_args(args(&["main.c"]), false).unwrap();
        assert_eq!(
            cmd,
            Command::Run(Options {
                path: PathBuf::from("main.c"),
                mode: Mode::Print,
                color: true,
            })
        );
    }

    #[test]
    fn test_flags() {
        let cmd = parse_args(args(&["--trivia", "a.c", "--no-color"]), false).unwrap();
        assert!(matches!(
            cmd,
            Command::Run(Options { mode: Mode::PrintTrivia, color: false, .. })
        ));

        let cmd = parse_args(args(&["--browse", "a.c"]), true).unwrap();
        assert!(matches!(
            cmd,
            Command::Run(Options { mode: Mode::Browse, color: false, .. })
        ));
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse_args(args(&["a.c", "-h"]), false).unwrap(), Command::Help);
    }

    #[test]
    fn test_usage_errors() {
        for bad in [
            args(&[]),
            args(&["--bogus", "a.c"]),
            args(&["a.c", "b.c"]),
            args(&["--browse", "--trivia", "a.c"]),
        ] {
            let err = parse_args(bad, false).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_dash_is_a_path() {
        let cmd = parse_args(args(&["-"]), false).unwrap();
        assert!(matches!(cmd, Command::Run(Options { ref path, .. }) if path == &PathBuf::from("-")));
    }

    #[test]
    fn test_output_errors() {
        let closed = io::Error::from(io::ErrorKind::BrokenPipe);
        assert!(output_result(Err(closed)).is_ok());
        assert!(output_result(Ok(())).is_ok());

        let err = output_result(Err(io::Error::from(io::ErrorKind::WriteZero))).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
        assert!(err.to_string().starts_with("cannot write output: "));
        assert_eq!(err.exit_code(), 1);
    }
}
