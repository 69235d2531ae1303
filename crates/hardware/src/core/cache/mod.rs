//! Set-associative cache with FIFO replacement.
//!
//! This module implements the cache model consulted by the pipeline's memory
//! stage. It provides:
//! 1. **Addressing:** `set_index = (address / block_words) % num_sets` and
//!    `tag = address / (block_words * num_sets)`.
//! 2. **Replacement:** A capacity-bounded, insertion-order (FIFO) policy per
//!    set; a hit causes no state change and no recency bump.
//! 3. **Snapshots:** Read-only per-line views for display layers.
//!
//! A line stores only the single word at the accessed address; the block
//! size participates in the addressing math but not in line contents.

/// Fixed-capacity FIFO set storage.
pub mod fifo;

use self::fifo::FifoSet;
use crate::common::SimError;
use crate::config::CacheConfig;

/// One cache line: validity, tag, and the single cached data word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether this line holds live data.
    pub valid: bool,
    /// Address tag identifying which block occupies the line.
    pub tag: usize,
    /// The word read from memory when the line was installed.
    pub data: i64,
}

/// Set-associative cache engine.
#[derive(Debug, Clone)]
pub struct Cache {
    sets: Vec<FifoSet>,
    block_words: usize,
    num_sets: usize,
    ways: usize,
}

impl Cache {
    /// Builds a cache for the given geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheGeometry`] when `capacity` is not
    /// evenly divisible by `block_words * ways` or any parameter is zero.
    pub fn new(config: &CacheConfig) -> Result<Self, SimError> {
        let num_sets = config.num_sets()?;
        Ok(Self {
            sets: (0..num_sets).map(|_| FifoSet::new(config.ways)).collect(),
            block_words: config.block_words,
            num_sets,
            ways: config.ways,
        })
    }

    /// Accesses the cache for a word address, returning `true` on a hit.
    ///
    /// On a miss, a new valid line holding `memory[address]` is appended to
    /// the addressed set; if the set then exceeds the associativity, the
    /// oldest-inserted line is evicted. A hit changes nothing.
    ///
    /// The caller must have bounds-checked `address` against `memory`.
    pub fn access(&mut self, address: usize, memory: &[i64]) -> bool {
        let set_index = self.set_index(address);
        let tag = self.tag(address);

        if self.sets[set_index].lookup(tag).is_some() {
            return true;
        }

        let evicted = self.sets[set_index].insert(CacheLine {
            valid: true,
            tag,
            data: memory[address],
        });
        if let Some(old) = evicted {
            tracing::trace!(set = set_index, tag = old.tag, "evicted oldest line");
        }
        false
    }

    /// Empties every set, preserving the geometry.
    pub fn reset(&mut self) {
        for set in &mut self.sets {
            set.clear();
        }
    }

    /// Returns an owned per-set, per-line view in insertion order.
    pub fn snapshot(&self) -> Vec<Vec<CacheLine>> {
        self.sets
            .iter()
            .map(|set| set.iter().copied().collect())
            .collect()
    }

    /// Returns `true` when no set holds any line.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(FifoSet::is_empty)
    }

    /// Number of sets in this geometry.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity (lines per set).
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Maps a word address to its set index.
    pub const fn set_index(&self, address: usize) -> usize {
        (address / self.block_words) % self.num_sets
    }

    /// Extracts the tag portion of a word address.
    pub const fn tag(&self, address: usize) -> usize {
        address / (self.block_words * self.num_sets)
    }
}
