//! Recoverable error types
//!
//! This module defines [`ConfigError`], raised while building [`Tunables`] or
//! parsing the command line, and [`RangeError`], raised when an interactive
//! range edit is refused.
//!
//! Neither is produced by [`MemoryRange`] itself: its preconditions are fatal
//! assertions. [`RangeError`] exists so that callers can check an edit first
//! and report it instead of aborting.
//!
//! [`Tunables`]: crate::config::Tunables
//! [`MemoryRange`]: crate::memory::MemoryRange

use std::fmt;

/// Errors in collector tunables or command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_virt_mem_fraction` must be at least 1
    InvalidFraction { value: usize },

    /// Granule size must be a non-zero power of two
    InvalidGranule { value: usize },

    /// Granule shift does not fit in a `usize`
    InvalidGranuleShift { value: u32 },

    /// A flag was given without its value
    MissingValue { flag: String },

    /// A value could not be parsed as a number
    InvalidNumber { flag: String, value: String },

    /// Unrecognized command-line argument
    UnknownArgument { arg: String },

    /// Range start given without a size, or too many positional arguments
    InvalidRange { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFraction { value } => {
                write!(f, "Invalid max virtual memory fraction {} (must be >= 1)", value)
            }
            ConfigError::InvalidGranule { value } => {
                write!(
                    f,
                    "Invalid granule size 0x{:x} (must be a non-zero power of two)",
                    value
                )
            }
            ConfigError::InvalidGranuleShift { value } => {
                write!(
                    f,
                    "Invalid granule shift {} (must be below {})",
                    value,
                    usize::BITS
                )
            }
            ConfigError::MissingValue { flag } => write!(f, "Missing value for '{}'", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Invalid number '{}' for '{}'", value, flag)
            }
            ConfigError::UnknownArgument { arg } => write!(f, "Unknown argument '{}'", arg),
            ConfigError::InvalidRange { message } => write!(f, "Invalid range: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Range edits that were refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Shrinking by at least the whole size would leave an empty or inverted range
    TooSmall { requested: usize, size: usize },

    /// Growing the front would move `start` below zero
    TooBig { requested: usize, start: usize },

    /// Growing the back would wrap past the top of the offset space
    Overflow { requested: usize, end: usize },

    /// Undo/redo past either end of the history
    HistoryExhausted { message: String },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::TooSmall { requested, size } => {
                write!(
                    f,
                    "Too small: cannot shrink by 0x{:x}, range size is 0x{:x}",
                    requested, size
                )
            }
            RangeError::TooBig { requested, start } => {
                write!(
                    f,
                    "Too big: cannot grow front by 0x{:x}, range starts at 0x{:x}",
                    requested, start
                )
            }
            RangeError::Overflow { requested, end } => {
                write!(
                    f,
                    "Overflow: cannot grow back by 0x{:x}, range ends at 0x{:x}",
                    requested, end
                )
            }
            RangeError::HistoryExhausted { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RangeError {}
