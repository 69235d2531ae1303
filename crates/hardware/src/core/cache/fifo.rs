//! Fixed-capacity FIFO cache set.
//!
//! Each cache set is an explicit first-in, first-out buffer of lines: a hit
//! never reorders anything, and when an insertion pushes the set past its
//! capacity the oldest-inserted line is evicted. This is not LRU:
//! replacement order is insertion order, irrespective of access recency.

use std::collections::VecDeque;

use super::CacheLine;

/// One cache set: at most `ways` lines in strict insertion order.
#[derive(Debug, Clone)]
pub struct FifoSet {
    lines: VecDeque<CacheLine>,
    ways: usize,
}

impl FifoSet {
    /// Creates an empty set holding at most `ways` lines.
    pub fn new(ways: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(ways),
            ways,
        }
    }

    /// Looks up a valid line with the given tag. Never reorders the set.
    pub fn lookup(&self, tag: usize) -> Option<&CacheLine> {
        self.lines.iter().find(|l| l.valid && l.tag == tag)
    }

    /// Appends a line, evicting and returning the oldest-inserted line when
    /// the set would exceed its capacity.
    pub fn insert(&mut self, line: CacheLine) -> Option<CacheLine> {
        self.lines.push_back(line);
        if self.lines.len() > self.ways {
            self.lines.pop_front()
        } else {
            None
        }
    }

    /// Empties the set; capacity is preserved.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines currently resident.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when the set holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates resident lines in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &CacheLine> {
        self.lines.iter()
    }
}
