// Constants for the virtual memory bookkeeping

/// Log2 of the granule size
pub const GRANULE_SIZE_SHIFT: u32 = 21;

/// Granule size (2 MiB)
/// Every heap reservation is a multiple of this
pub const GRANULE_SIZE: usize = 1 << GRANULE_SIZE_SHIFT;

/// Default share of the address space the heap may reserve, as a divisor
/// (2 means the heap may take half)
pub const DEFAULT_MAX_VIRT_MEM_FRACTION: usize = 2;

/// Maximum number of states kept by a range history before the oldest are dropped
pub const DEFAULT_HISTORY_LIMIT: usize = 4096;
