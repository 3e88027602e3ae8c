//! TUI pane rendering modules
//!
//! - [`source`]: source code colored by lexeme, with the selected token marked
//! - [`tokens`]: scrolling token list
//! - [`status`]: status bar with keybindings and scan state
//!
//! Each pane module exports a `render_*` function taking a `*RenderData`
//! borrow of the app state, plus any scroll state it owns.

pub mod source;
pub mod status;
pub mod tokens;

pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use tokens::{render_tokens_pane, TokensRenderData, TokensScrollState};
