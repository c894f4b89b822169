//! Virtual memory bookkeeping primitives
//!
//! This module provides the two leaf abstractions the collector's address
//! space management is built on:
//! - [`range`]: [`MemoryRange`], a half-open `[start, end)` span of offsets
//! - [`limit`]: [`AddressSpaceLimit`], the policy bounding how much address
//!   space the heap may reserve
//!
//! # Coordinates
//!
//! Offsets are plain `usize` values measured from the base of the collector's
//! address space. They are granule-agnostic: a range may start or end anywhere,
//! and the alignment helpers below are used by callers that need granule
//! boundaries.
//!
//! ```text
//! align_up(5, 4)    →  8
//! align_down(5, 4)  →  4
//! ```
//!
//! All alignments must be powers of two.

pub mod constants;
pub mod limit;
pub mod range;

pub use limit::{AddressSpaceLimit, AllocatableMemoryLimit, FixedMemoryLimit, ProcessMemoryLimit};
pub use range::MemoryRange;

/// Offset into the collector's address space
pub type Offset = usize;

/// Round `value` up to the next multiple of `alignment`.
///
/// Panics if the result does not fit in a `usize`.
pub fn align_up(value: usize, alignment: usize) -> usize {
    checked_align_up(value, alignment)
        .unwrap_or_else(|| panic!("align_up overflow: 0x{:x} to 0x{:x}", value, alignment))
}

/// Round `value` up to the next multiple of `alignment`, or `None` on overflow
pub fn checked_align_up(value: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());
    let mask = alignment - 1;
    value.checked_add(mask).map(|v| v & !mask)
}

/// Round `value` down to the previous multiple of `alignment`
pub fn align_down(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    value & !(alignment - 1)
}

/// Check whether `value` is a multiple of `alignment`
pub fn is_aligned(value: usize, alignment: usize) -> bool {
    debug_assert!(alignment.is_power_of_two());
    value & (alignment - 1) == 0
}
