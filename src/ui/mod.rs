//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, edit step size
//! - **[`panes`]**: stateless render functions for each visible pane (range,
//!   history, limit, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`RangeHistory`]
//! and a [`LimitReport`], then call [`App::run`] to start the event loop.
//!
//! [`RangeHistory`]: crate::history::RangeHistory
//! [`LimitReport`]: app::LimitReport
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, LimitReport};
