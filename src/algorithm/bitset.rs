use bitvec::prelude::*;
use std::fmt;
use std::ops::Range;

/// Fixed-size bitset of candidate slots for one board cell
///
/// Slot `i` stands for tile number `i / 8` (in ascending id order) under
/// orientation `i % 8`, so iterating set bits in ascending order walks
/// candidates in construction order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no candidates present
    pub fn new(slots: usize) -> Self {
        Self {
            bits: bitvec![0; slots],
        }
    }

    /// Create a set containing every slot
    pub fn all(slots: usize) -> Self {
        Self {
            bits: bitvec![1; slots],
        }
    }

    /// Number of slots the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a slot, ignoring out-of-range slots
    pub fn insert(&mut self, slot: usize) {
        if slot < self.bits.len() {
            self.bits.set(slot, true);
        }
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Reduce the set to a single slot
    pub fn retain_only(&mut self, slot: usize) {
        self.bits.fill(false);
        self.insert(slot);
    }

    /// Remove every slot in a range, returning how many were present
    pub fn remove_range(&mut self, slots: Range<usize>) -> usize {
        let end = slots.end.min(self.bits.len());
        let start = slots.start.min(end);
        self.bits.get_mut(start..end).map_or(0, |window| {
            let removed = window.count_ones();
            window.fill(false);
            removed
        })
    }

    /// Test if no candidates remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining candidates
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The only remaining slot, if exactly one is left
    pub fn single(&self) -> Option<usize> {
        let mut ones = self.bits.iter_ones();
        let first = ones.next()?;
        ones.next().is_none().then_some(first)
    }

    /// Remaining slots in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} of {} slots)",
            self.count(),
            self.capacity()
        )
    }
}
