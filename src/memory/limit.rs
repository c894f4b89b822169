//! Heap sizing policy over the process address space
//!
//! The collector never reserves all of the address space for its heap: thread
//! stacks, other allocators and mapped files need room too. [`AddressSpaceLimit`]
//! divides the platform's allocatable ceiling by the configured
//! `max_virt_mem_fraction` and rounds the result up to a granule boundary so
//! it can be used directly as a reservation size.
//!
//! ```text
//! heap = align_up(ceiling / fraction, granule)
//! ```
//!
//! When the platform reports no ceiling, `usize::MAX` stands in for it.

use super::{align_down, checked_align_up};
use crate::config::Tunables;

/// Source of the platform's ceiling on allocatable virtual memory
pub trait AllocatableMemoryLimit {
    /// The ceiling in bytes, or `None` if the platform imposes none
    fn allocatable_memory_limit(&self) -> Option<usize>;
}

/// A fixed ceiling, independent of the running platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMemoryLimit(pub Option<usize>);

impl AllocatableMemoryLimit for FixedMemoryLimit {
    fn allocatable_memory_limit(&self) -> Option<usize> {
        self.0
    }
}

/// The ceiling the operating system enforces on this process.
///
/// On Linux this is the soft `RLIMIT_AS` value as reported by
/// `/proc/self/limits`. Anywhere the value cannot be determined it is treated
/// as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessMemoryLimit;

impl AllocatableMemoryLimit for ProcessMemoryLimit {
    #[cfg(target_os = "linux")]
    fn allocatable_memory_limit(&self) -> Option<usize> {
        std::fs::read_to_string("/proc/self/limits")
            .ok()
            .and_then(|contents| parse_proc_limits(&contents))
    }

    #[cfg(not(target_os = "linux"))]
    fn allocatable_memory_limit(&self) -> Option<usize> {
        None
    }
}

/// Extract the soft "Max address space" limit from `/proc/<pid>/limits` text.
///
/// Returns `None` for `unlimited`, for a missing row, or for a value that
/// does not parse.
pub fn parse_proc_limits(contents: &str) -> Option<usize> {
    let row = contents
        .lines()
        .find_map(|line| line.strip_prefix("Max address space"))?;
    let soft = row.split_whitespace().next()?;
    if soft == "unlimited" {
        return None;
    }
    soft.parse().ok()
}

/// Compute the heap limit from explicit inputs.
///
/// `fraction` must be at least 1 and `granule` a power of two. If rounding
/// `ceiling / fraction` up would wrap, the largest granule multiple is
/// returned instead.
pub fn heap_limit(ceiling: Option<usize>, fraction: usize, granule: usize) -> usize {
    debug_assert!(fraction >= 1);
    let limit = ceiling.unwrap_or(usize::MAX) / fraction;
    checked_align_up(limit, granule).unwrap_or_else(|| align_down(usize::MAX, granule))
}

/// Heap sizing policy bound to a ceiling source
#[derive(Debug, Clone, Default)]
pub struct AddressSpaceLimit<L: AllocatableMemoryLimit = ProcessMemoryLimit> {
    source: L,
}

impl<L: AllocatableMemoryLimit> AddressSpaceLimit<L> {
    pub fn new(source: L) -> Self {
        AddressSpaceLimit { source }
    }

    /// The ceiling as currently reported by the source
    pub fn ceiling(&self) -> Option<usize> {
        self.source.allocatable_memory_limit()
    }

    /// The largest granule-aligned byte count the heap may reserve.
    ///
    /// The source is queried and `tunables` read on every call; nothing is cached.
    pub fn heap(&self, tunables: &Tunables) -> usize {
        heap_limit(
            self.ceiling(),
            tunables.max_virt_mem_fraction(),
            tunables.granule_size(),
        )
    }
}
