//! Report viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state and keyboard event loop
//! - **[`panes`]**: stateless render functions for the trace, summary and status bar
//! - **[`theme`]**: color palette used by all panes
//!
//! Construct an [`App`] from a finished probe run and call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
