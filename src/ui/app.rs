//! Token browser state and event loop

use crate::lexer::{LexError, Lexeme, Scanner, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

use super::panes::{
    render_source_pane, render_status_bar, render_tokens_pane, SourceRenderData,
    SourceScrollState, StatusRenderData, TokensRenderData, TokensScrollState,
};

/// Tokens skipped by PageUp/PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Name shown in the source pane title
    pub title: String,

    pub source_code: String,

    /// Every lexeme scanned before end of input or the first error
    pub lexemes: Vec<Lexeme>,

    /// Indices into `lexemes` of the significant tokens
    pub token_indices: Vec<usize>,

    pub error: Option<LexError>,

    /// Index into `token_indices`
    pub selected: usize,

    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub tokens_scroll: TokensScrollState,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    /// Scan `source_code` and set up the browser over the result.
    pub fn new(title: impl Into<String>, source_code: String) -> Self {
        let mut lexemes = Vec::new();
        let mut error = None;
        for item in Scanner::new(&source_code).lexemes() {
            match item {
                Ok(lexeme) => lexemes.push(lexeme),
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        let token_indices: Vec<usize> = lexemes
            .iter()
            .enumerate()
            .filter(|(_, lexeme)| !lexeme.is_trivia())
            .map(|(idx, _)| idx)
            .collect();

        let status_message = match &error {
            Some(err) => err.to_string(),
            None => format!("Scanned {} tokens", token_indices.len()),
        };
        debug!(
            tokens = token_indices.len(),
            lexemes = lexemes.len(),
            error = error.is_some(),
            "browser ready"
        );

        App {
            title: title.into(),
            source_code,
            lexemes,
            token_indices,
            error,
            selected: 0,
            focused_pane: FocusedPane::Tokens,
            source_scroll: SourceScrollState::default(),
            tokens_scroll: TokensScrollState::default(),
            should_quit: false,
            status_message,
        }
    }

    /// The currently selected token, if any were scanned.
    pub fn selected_token(&self) -> Option<&Token> {
        let idx = *self.token_indices.get(self.selected)?;
        self.lexemes[idx].as_token()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Source (left) | Tokens (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Follow the selected token, or the error when nothing was scanned
        let current_line = self
            .selected_token()
            .map(|t| t.location.line)
            .or_else(|| self.error.as_ref().map(|e| e.location.line))
            .unwrap_or(0);

        let source_data = SourceRenderData {
            title: &self.title,
            source: &self.source_code,
            lexemes: &self.lexemes,
            selected: self.token_indices.get(self.selected).copied(),
            error: self.error.as_ref(),
            is_focused: self.focused_pane == FocusedPane::Source,
        };
        render_source_pane(
            frame,
            columns[0],
            &source_data,
            current_line,
            &mut self.source_scroll,
        );

        // Borrow fields directly so the scroll state can be borrowed mutably
        let tokens: Vec<&Token> = self
            .token_indices
            .iter()
            .filter_map(|&idx| self.lexemes[idx].as_token())
            .collect();
        let tokens_data = TokensRenderData {
            tokens: &tokens,
            selected: self.selected,
            error: self.error.as_ref(),
            is_focused: self.focused_pane == FocusedPane::Tokens,
        };
        render_tokens_pane(frame, columns[1], &tokens_data, &mut self.tokens_scroll);

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                selected: self.selected,
                total_tokens: self.token_indices.len(),
                has_error: self.error.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Down | KeyCode::Char('j') => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected.saturating_add(1)),
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
            },
            KeyCode::Up | KeyCode::Char('k') => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
            },
            KeyCode::PageDown => self.select(self.selected.saturating_add(PAGE)),
            KeyCode::PageUp => self.select(self.selected.saturating_sub(PAGE)),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX),
            _ => {}
        }
    }

    /// Select a token by index, clamped to the scanned range.
    fn select(&mut self, index: usize) {
        let last = self.token_indices.len().saturating_sub(1);
        self.selected = index.min(last);
        // Re-centre the source pane on the new selection
        self.source_scroll.target_line_row = None;

        if let Some(token) = self.selected_token() {
            self.status_message = format!(
                "{} {:?} at {}",
                token.kind, token.text, token.location
            );
        }
    }
}
