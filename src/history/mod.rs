// Edit history for stepping a range backward and forward

use crate::errors::RangeError;
use crate::memory::constants::DEFAULT_HISTORY_LIMIT;
use crate::memory::MemoryRange;
use rustc_hash::FxHashMap;
use std::fmt;

/// An edge edit on a [`MemoryRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    ShrinkFromFront(usize),
    ShrinkFromBack(usize),
    GrowFromFront(usize),
    GrowFromBack(usize),
}

impl RangeOp {
    /// Check whether applying this edit to `range` would trip a precondition
    pub fn check(&self, range: &MemoryRange) -> Result<(), RangeError> {
        match *self {
            RangeOp::ShrinkFromFront(n) | RangeOp::ShrinkFromBack(n) => {
                if n >= range.size() {
                    return Err(RangeError::TooSmall {
                        requested: n,
                        size: range.size(),
                    });
                }
            }
            RangeOp::GrowFromFront(n) => {
                if n > range.start() {
                    return Err(RangeError::TooBig {
                        requested: n,
                        start: range.start(),
                    });
                }
            }
            RangeOp::GrowFromBack(n) => {
                if range.end().checked_add(n).is_none() {
                    return Err(RangeError::Overflow {
                        requested: n,
                        end: range.end(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply the edit. Panics on a precondition violation, like the mutators.
    pub fn apply(&self, range: &mut MemoryRange) {
        match *self {
            RangeOp::ShrinkFromFront(n) => range.shrink_from_front(n),
            RangeOp::ShrinkFromBack(n) => range.shrink_from_back(n),
            RangeOp::GrowFromFront(n) => range.grow_from_front(n),
            RangeOp::GrowFromBack(n) => range.grow_from_back(n),
        }
    }

    /// The edit that undoes this one
    pub fn inverse(&self) -> RangeOp {
        match *self {
            RangeOp::ShrinkFromFront(n) => RangeOp::GrowFromFront(n),
            RangeOp::ShrinkFromBack(n) => RangeOp::GrowFromBack(n),
            RangeOp::GrowFromFront(n) => RangeOp::ShrinkFromFront(n),
            RangeOp::GrowFromBack(n) => RangeOp::ShrinkFromBack(n),
        }
    }

    pub fn amount(&self) -> usize {
        match *self {
            RangeOp::ShrinkFromFront(n)
            | RangeOp::ShrinkFromBack(n)
            | RangeOp::GrowFromFront(n)
            | RangeOp::GrowFromBack(n) => n,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeOp::ShrinkFromFront(_) => "shrink_from_front",
            RangeOp::ShrinkFromBack(_) => "shrink_from_back",
            RangeOp::GrowFromFront(_) => "grow_from_front",
            RangeOp::GrowFromBack(_) => "grow_from_back",
        };
        write!(f, "{}(0x{:x})", name, self.amount())
    }
}

/// One state in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub range: MemoryRange,
    /// The edit that produced this state (`None` for the initial range)
    pub op: Option<RangeOp>,
}

/// Linear, bounded history of range states
#[derive(Debug, Clone)]
pub struct RangeHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
    max_entries: usize,
    first_seen: FxHashMap<MemoryRange, usize>,
}

impl RangeHistory {
    pub fn new(initial: MemoryRange) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history that keeps at most `max_entries` states (minimum 1)
    pub fn with_limit(initial: MemoryRange, max_entries: usize) -> Self {
        let mut first_seen = FxHashMap::default();
        first_seen.insert(initial, 0);
        RangeHistory {
            entries: vec![HistoryEntry {
                range: initial,
                op: None,
            }],
            position: 0,
            max_entries: max_entries.max(1),
            first_seen,
        }
    }

    /// The range at the current position
    pub fn current(&self) -> MemoryRange {
        self.entries[self.position].range
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial state is never dropped without a replacement
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Earliest index whose range equals `range`
    pub fn first_seen(&self, range: &MemoryRange) -> Option<usize> {
        self.first_seen.get(range).copied()
    }

    /// Apply `op` to the current range and record the result.
    ///
    /// Anything after the current position is discarded. A refused edit
    /// leaves the history unchanged.
    pub fn apply(&mut self, op: RangeOp) -> Result<MemoryRange, RangeError> {
        let mut range = self.current();
        op.check(&range)?;
        op.apply(&mut range);

        self.entries.truncate(self.position + 1);
        self.entries.push(HistoryEntry {
            range,
            op: Some(op),
        });

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.position = self.entries.len() - 1;
        self.reindex();

        Ok(range)
    }

    pub fn step_backward(&mut self) -> Result<MemoryRange, RangeError> {
        if self.position == 0 {
            return Err(RangeError::HistoryExhausted {
                message: "Already at the first state".to_string(),
            });
        }
        self.position -= 1;
        Ok(self.current())
    }

    pub fn step_forward(&mut self) -> Result<MemoryRange, RangeError> {
        if self.position + 1 >= self.entries.len() {
            return Err(RangeError::HistoryExhausted {
                message: "Already at the latest state".to_string(),
            });
        }
        self.position += 1;
        Ok(self.current())
    }

    pub fn rewind_to_start(&mut self) -> MemoryRange {
        self.position = 0;
        self.current()
    }

    pub fn jump_to_end(&mut self) -> MemoryRange {
        self.position = self.entries.len() - 1;
        self.current()
    }

    // Rebuilt after truncation or trimming since indices shift
    fn reindex(&mut self) {
        self.first_seen.clear();
        for (i, entry) in self.entries.iter().enumerate() {
            self.first_seen.entry(entry.range).or_insert(i);
        }
    }
}
