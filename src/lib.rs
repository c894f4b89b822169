//! # Introduction
//!
//! vmspan holds the address-space bookkeeping primitives of a granule-based
//! garbage collector: the policy that caps how much virtual memory the heap
//! may reserve, and the half-open range type every region and free-list entry
//! is built from. A terminal inspector built with
//! [ratatui](https://docs.rs/ratatui) lets you edit a range and step back
//! through the edits.
//!
//! ## Components
//!
//! ```text
//! platform ceiling ─┐
//! Tunables ─────────┴→ AddressSpaceLimit::heap → heap limit
//!
//! MemoryRange ⇄ RangeOp → RangeHistory → TUI
//! ```
//!
//! 1. [`memory`]: [`memory::MemoryRange`], [`memory::AddressSpaceLimit`] and
//!    the alignment helpers.
//! 2. [`config`]: [`config::Tunables`] and command-line parsing.
//! 3. [`errors`]: recoverable configuration and edit errors.
//! 4. [`history`]: checked range edits and an undoable edit log.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Invariants
//!
//! A range always satisfies `start <= end`. The mutators assert their
//! preconditions and abort rather than invert a range; use
//! [`history::RangeOp::check`] to test an edit first.

pub mod config;
pub mod errors;
pub mod history;
pub mod memory;
pub mod ui;
