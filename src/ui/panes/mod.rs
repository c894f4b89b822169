//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`range`]: The inspected range, its alignment and its place in the heap limit
//! - [`history`]: The edit log with the current position highlighted
//! - [`limit`]: Inputs and result of the heap sizing policy
//! - [`status`]: Status bar with keybindings and history position
//! - `utils`: Shared formatting helpers
//!
//! Each pane module exports a `render_*_pane()` function and the
//! `*RenderData` struct it takes.

mod utils;

pub mod history;
pub mod limit;
pub mod range;
pub mod status;

pub use history::{render_history_pane, HistoryRenderData};
pub use limit::{render_limit_pane, LimitRenderData};
pub use range::{render_range_pane, RangeRenderData};
pub use status::{render_status_bar, StatusRenderData};
