//! Half-open address ranges
//!
//! A [`MemoryRange`] describes `[start, end)`: `start` is the first offset in
//! the range and `end` is one past the last. An empty range (`start == end`)
//! is valid.
//!
//! # Mutation
//!
//! Ranges are resized in place at either edge. The shrink and front-grow
//! operations carry preconditions that are checked with `assert!` in every
//! build profile; violating one is a bug in the caller and aborts rather than
//! producing an inverted range:
//!
//! | Operation           | Requires      | Effect        |
//! |---------------------|---------------|---------------|
//! | `shrink_from_front` | `n < size()`  | `start += n`  |
//! | `shrink_from_back`  | `n < size()`  | `end -= n`    |
//! | `grow_from_front`   | `n <= start`  | `start -= n`  |
//! | `grow_from_back`    | (none)        | `end += n`    |
//!
//! Callers that need to refuse an edit instead of aborting should check it
//! first with [`RangeOp::check`](crate::history::RangeOp::check).

use super::Offset;
use std::fmt;

/// A contiguous half-open span of the collector's address space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryRange {
    start: Offset,
    end: Offset,
}

impl MemoryRange {
    /// Create the range `[start, start + size)`.
    ///
    /// The address space is bounded by construction, so `start + size` is
    /// expected to fit. Overflow is the caller's bug.
    pub fn new(start: Offset, size: usize) -> Self {
        MemoryRange {
            start,
            end: start + size,
        }
    }

    pub fn start(&self) -> Offset {
        self.start
    }

    /// One past the last offset in the range
    pub fn end(&self) -> Offset {
        self.end
    }

    pub fn size(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether `other` lies entirely within this range.
    ///
    /// Every range contains itself. An empty range is contained wherever its
    /// boundary point falls inside `[start, end]`.
    pub fn contains(&self, other: &MemoryRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Drop `size` bytes from the low end.
    ///
    /// Panics unless `size < self.size()`.
    pub fn shrink_from_front(&mut self, size: usize) {
        assert!(self.size() > size, "Too small");
        self.start += size;
    }

    /// Drop `size` bytes from the high end.
    ///
    /// Panics unless `size < self.size()`.
    pub fn shrink_from_back(&mut self, size: usize) {
        assert!(self.size() > size, "Too small");
        self.end -= size;
    }

    /// Extend the range downwards by `size` bytes.
    ///
    /// Panics if that would move `start` below offset zero.
    pub fn grow_from_front(&mut self, size: usize) {
        assert!(self.start >= size, "Too big");
        self.start -= size;
    }

    /// Extend the range upwards by `size` bytes.
    ///
    /// There is no upper bound check here: the ceiling of the address space
    /// belongs to whoever hands out ranges, and they must not grow past it.
    pub fn grow_from_back(&mut self, size: usize) {
        self.end += size;
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:x}, 0x{:x})", self.start, self.end)
    }
}
