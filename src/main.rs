// cscan: lexical analyzer for C

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use cscan::cli::{self, CliError, Command, Mode, Options};
use cscan::lexer::{lex_all, tokenize};
use cscan::logging;
use cscan::output;
use cscan::ui::App;

fn main() -> ExitCode {
    logging::init_tracing();

    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let result = cli::parse_args(std::env::args().skip(1), no_color_env).and_then(|command| {
        match command {
            Command::Help => cli::output_result(writeln!(io::stdout(), "{}", cli::USAGE)),
            Command::Run(options) => run(&options),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError) {
    let color = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut stderr = io::stderr().lock();
    // Nowhere left to report a failed write to stderr; the exit code still
    // carries the failure.
    let _ = match err {
        CliError::Lex(lex) => output::write_error(&mut stderr, lex, color),
        CliError::Usage(message) => writeln!(stderr, "Error: {}\n\n{}", message, cli::USAGE),
        other => writeln!(stderr, "Error: {}", other),
    };
}

fn run(options: &Options) -> Result<(), CliError> {
    let source = fs::read_to_string(&options.path).map_err(|source| CliError::Io {
        path: options.path.clone(),
        source,
    })?;
    debug!(path = %options.path.display(), bytes = source.len(), "read source");

    let color = options.color && io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();

    match options.mode {
        Mode::Print => {
            let tokens = tokenize(&source)?;
            cli::output_result(output::write_tokens(&mut stdout, &tokens, color))?;
        }
        Mode::PrintTrivia => {
            let lexemes = lex_all(&source)?;
            cli::output_result(output::write_lexemes(&mut stdout, &lexemes, color))?;
        }
        Mode::Browse => {
            drop(stdout);
            let title = options.path.display().to_string();
            let mut app = App::new(title, source);
            browse(&mut app)?;
            if let Some(err) = app.error.take() {
                return Err(err.into());
            }
        }
    }

    Ok(())
}

fn browse(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
