// Integration tests for checked range edits and the edit history

use vmspan::errors::RangeError;
use vmspan::history::{RangeHistory, RangeOp};
use vmspan::memory::MemoryRange;

#[test]
fn test_check_matches_preconditions() {
    let range = MemoryRange::new(100, 50);

    assert_eq!(RangeOp::ShrinkFromFront(49).check(&range), Ok(()));
    assert_eq!(
        RangeOp::ShrinkFromFront(50).check(&range),
        Err(RangeError::TooSmall {
            requested: 50,
            size: 50
        })
    );
    assert_eq!(
        RangeOp::ShrinkFromBack(60).check(&range),
        Err(RangeError::TooSmall {
            requested: 60,
            size: 50
        })
    );
    assert_eq!(RangeOp::GrowFromFront(100).check(&range), Ok(()));
    assert_eq!(
        RangeOp::GrowFromFront(101).check(&range),
        Err(RangeError::TooBig {
            requested: 101,
            start: 100
        })
    );
    assert_eq!(RangeOp::GrowFromBack(1 << 20).check(&range), Ok(()));
    assert_eq!(
        RangeOp::GrowFromBack(usize::MAX).check(&range),
        Err(RangeError::Overflow {
            requested: usize::MAX,
            end: 150
        })
    );
}

#[test]
fn test_apply_and_inverse() {
    let original = MemoryRange::new(100, 50);
    for op in [
        RangeOp::ShrinkFromFront(10),
        RangeOp::ShrinkFromBack(10),
        RangeOp::GrowFromFront(10),
        RangeOp::GrowFromBack(10),
    ] {
        let mut range = original;
        op.apply(&mut range);
        assert_ne!(range, original);
        op.inverse().apply(&mut range);
        assert_eq!(range, original, "{} did not invert", op);
    }
}

#[test]
#[should_panic(expected = "Too big")]
fn test_apply_unchecked_edit_panics() {
    let mut range = MemoryRange::new(4, 4);
    RangeOp::GrowFromFront(8).apply(&mut range);
}

#[test]
fn test_op_display() {
    assert_eq!(
        RangeOp::ShrinkFromFront(0x1000).to_string(),
        "shrink_from_front(0x1000)"
    );
    assert_eq!(RangeOp::GrowFromBack(16).to_string(), "grow_from_back(0x10)");
}

#[test]
fn test_history_records_edits() {
    let mut history = RangeHistory::new(MemoryRange::new(100, 50));
    assert_eq!(history.len(), 1);
    assert_eq!(history.position(), 0);

    let range = history
        .apply(RangeOp::ShrinkFromFront(10))
        .expect("edit refused");
    assert_eq!(range, MemoryRange::new(110, 40));
    assert_eq!(history.current(), range);
    assert_eq!(history.len(), 2);
    assert_eq!(history.position(), 1);
    assert_eq!(history.entries()[1].op, Some(RangeOp::ShrinkFromFront(10)));
    assert_eq!(history.entries()[0].op, None);
}

#[test]
fn test_refused_edit_leaves_history_unchanged() {
    let mut history = RangeHistory::new(MemoryRange::new(100, 50));
    let result = history.apply(RangeOp::ShrinkFromBack(50));
    assert!(matches!(result, Err(RangeError::TooSmall { .. })));
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), MemoryRange::new(100, 50));
}

#[test]
fn test_step_backward_and_forward() {
    let mut history = RangeHistory::new(MemoryRange::new(100, 50));
    history.apply(RangeOp::GrowFromBack(50)).expect("edit refused");
    history.apply(RangeOp::GrowFromFront(50)).expect("edit refused");

    assert_eq!(
        history.step_backward().expect("step failed"),
        MemoryRange::new(100, 100)
    );
    assert_eq!(
        history.step_backward().expect("step failed"),
        MemoryRange::new(100, 50)
    );
    assert!(matches!(
        history.step_backward(),
        Err(RangeError::HistoryExhausted { .. })
    ));

    assert_eq!(
        history.step_forward().expect("step failed"),
        MemoryRange::new(100, 100)
    );
    assert_eq!(history.jump_to_end(), MemoryRange::new(50, 150));
    assert!(matches!(
        history.step_forward(),
        Err(RangeError::HistoryExhausted { .. })
    ));
    assert_eq!(history.rewind_to_start(), MemoryRange::new(100, 50));
}

#[test]
fn test_edit_after_undo_drops_redo_tail() {
    let mut history = RangeHistory::new(MemoryRange::new(0, 64));
    history.apply(RangeOp::GrowFromBack(16)).expect("edit refused");
    history.apply(RangeOp::GrowFromBack(16)).expect("edit refused");
    history.step_backward().expect("step failed");

    history
        .apply(RangeOp::ShrinkFromBack(8))
        .expect("edit refused");
    assert_eq!(history.len(), 3);
    assert_eq!(history.current(), MemoryRange::new(0, 72));
    assert!(history.step_forward().is_err());
}

#[test]
fn test_first_seen_tracks_restored_ranges() {
    let initial = MemoryRange::new(4096, 4096);
    let mut history = RangeHistory::new(initial);
    history
        .apply(RangeOp::ShrinkFromFront(1024))
        .expect("edit refused");
    let restored = history
        .apply(RangeOp::GrowFromFront(1024))
        .expect("edit refused");

    assert_eq!(restored, initial);
    assert_eq!(history.first_seen(&restored), Some(0));
    assert_eq!(history.first_seen(&MemoryRange::new(5120, 3072)), Some(1));
    assert_eq!(history.first_seen(&MemoryRange::new(0, 1)), None);
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut history = RangeHistory::with_limit(MemoryRange::new(0, 1), 3);
    for _ in 0..5 {
        history.apply(RangeOp::GrowFromBack(1)).expect("edit refused");
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.position(), 2);
    assert_eq!(history.current(), MemoryRange::new(0, 6));
    assert_eq!(history.rewind_to_start(), MemoryRange::new(0, 4));
    assert_eq!(history.first_seen(&MemoryRange::new(0, 1)), None);
    assert_eq!(history.first_seen(&MemoryRange::new(0, 4)), Some(0));
}
