//! Terminal token browser built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: browser state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, status bar)
//! - **[`theme`]**: colour palette shared by the panes and the plain-text
//!   printer
//!
//! Construct an [`App`] from a file's contents and call [`App::run`] to start
//! the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
