// Integration tests for the heap limit policy

use vmspan::config::Tunables;
use vmspan::memory::constants::GRANULE_SIZE;
use vmspan::memory::limit::{heap_limit, parse_proc_limits};
use vmspan::memory::{align_up, AddressSpaceLimit, AllocatableMemoryLimit, FixedMemoryLimit};
use std::cell::Cell;

#[test]
fn test_heap_limit_example() {
    assert_eq!(heap_limit(Some(1_000_000), 2, 1024), 500_736);
}

#[test]
fn test_heap_limit_matches_formula() {
    for ceiling in [0, 1, 1023, 1024, 1_000_000, 1 << 47, usize::MAX / 3] {
        for fraction in [1, 2, 3, 7, 100] {
            for granule in [1, 1024, GRANULE_SIZE] {
                let result = heap_limit(Some(ceiling), fraction, granule);
                assert_eq!(result, align_up(ceiling / fraction, granule));
                assert_eq!(result % granule, 0);
                assert!(result >= ceiling / fraction);
            }
        }
    }
}

#[test]
fn test_no_ceiling_uses_max() {
    for fraction in [2, 3, 4, 100] {
        assert_eq!(
            heap_limit(None, fraction, GRANULE_SIZE),
            align_up(usize::MAX / fraction, GRANULE_SIZE)
        );
    }
}

#[test]
fn test_no_ceiling_full_fraction_saturates() {
    let result = heap_limit(None, 1, GRANULE_SIZE);
    assert_eq!(result % GRANULE_SIZE, 0);
    assert_eq!(result, usize::MAX - (GRANULE_SIZE - 1));
}

#[test]
fn test_heap_reads_tunables() {
    let limit = AddressSpaceLimit::new(FixedMemoryLimit(Some(1_000_000)));
    let half = Tunables::new(2, 1024).expect("valid tunables");
    let quarter = Tunables::new(4, 1024).expect("valid tunables");
    assert_eq!(limit.heap(&half), 500_736);
    assert_eq!(limit.heap(&quarter), align_up(250_000, 1024));
    assert_eq!(limit.ceiling(), Some(1_000_000));
}

#[test]
fn test_heap_with_default_tunables() {
    let limit = AddressSpaceLimit::new(FixedMemoryLimit(None));
    assert_eq!(
        limit.heap(&Tunables::default()),
        align_up(usize::MAX / 2, GRANULE_SIZE)
    );
    assert_eq!(limit.ceiling(), None);
}

struct CountingLimit<'a> {
    calls: &'a Cell<usize>,
}

impl AllocatableMemoryLimit for CountingLimit<'_> {
    fn allocatable_memory_limit(&self) -> Option<usize> {
        self.calls.set(self.calls.get() + 1);
        Some(1 << 30)
    }
}

#[test]
fn test_source_queried_on_every_call() {
    let calls = Cell::new(0);
    let limit = AddressSpaceLimit::new(CountingLimit { calls: &calls });
    let tunables = Tunables::default();
    assert_eq!(limit.heap(&tunables), 1 << 29);
    assert_eq!(limit.heap(&tunables), 1 << 29);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_parse_proc_limits() {
    let limited = "\
Limit                     Soft Limit           Hard Limit           Units
Max cpu time              unlimited            unlimited            seconds
Max address space         8589934592           unlimited            bytes
Max file locks            unlimited            unlimited            locks
";
    assert_eq!(parse_proc_limits(limited), Some(8_589_934_592));

    let unlimited = "\
Limit                     Soft Limit           Hard Limit           Units
Max address space         unlimited            unlimited            bytes
";
    assert_eq!(parse_proc_limits(unlimited), None);

    assert_eq!(parse_proc_limits(""), None);
    assert_eq!(parse_proc_limits("Max address space garbage x bytes"), None);
}
