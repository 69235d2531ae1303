//! Cache tests.
//!
//! Verifies the set/tag addressing math, insertion-order (FIFO) replacement,
//! miss side effects, and the invalid-geometry construction error. The
//! default geometry (16 words, 4-word blocks, 2 ways) yields two sets; a
//! word address maps to set `(addr / 4) % 2` with tag `addr / 8`.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use pipesim_core::common::SimError;
use pipesim_core::config::CacheConfig;
use pipesim_core::core::cache::Cache;

fn seeded_memory() -> Vec<i64> {
    (0..1024).collect()
}

fn default_cache() -> Cache {
    Cache::new(&CacheConfig::default()).unwrap()
}

/// Accessing the same address twice gives (miss, hit) while the set has room.
#[test]
fn repeat_access_is_miss_then_hit() {
    let memory = seeded_memory();
    let mut cache = default_cache();

    assert!(!cache.access(0, &memory));
    assert!(cache.access(0, &memory));
}

/// A miss installs a valid line holding the accessed memory word.
#[test]
fn miss_installs_accessed_word() {
    let memory = seeded_memory();
    let mut cache = default_cache();

    assert!(!cache.access(100, &memory));

    let set = &cache.snapshot()[cache.set_index(100)];
    assert_eq!(set.len(), 1);
    assert!(set[0].valid);
    assert_eq!(set[0].tag, cache.tag(100));
    assert_eq!(set[0].data, 100);
}

/// Filling a set past its associativity evicts the earliest-inserted line,
/// even when that line was the most recently hit.
#[test]
fn fifo_evicts_earliest_inserted_not_least_recent() {
    let memory = seeded_memory();
    let mut cache = default_cache();

    // Addresses 0, 8, 16 all map to set 0 with tags 0, 1, 2.
    assert_eq!(cache.set_index(0), cache.set_index(8));
    assert_eq!(cache.set_index(0), cache.set_index(16));

    assert!(!cache.access(0, &memory));
    assert!(!cache.access(8, &memory));

    // Hit the oldest line; FIFO gives it no protection.
    assert!(cache.access(0, &memory));

    // Third distinct tag evicts the earliest-inserted line (tag 0).
    assert!(!cache.access(16, &memory));
    assert!(!cache.access(0, &memory), "tag 0 must have been evicted");

    // And the eviction chain continued: tag 1 went next on the re-miss of 0.
    assert!(!cache.access(8, &memory), "tag 1 must have been evicted");
}

/// A hit leaves the cache byte-for-byte unchanged: no recency bump.
#[test]
fn hit_causes_no_state_change() {
    let memory = seeded_memory();
    let mut cache = default_cache();

    assert!(!cache.access(4, &memory));
    assert!(!cache.access(12, &memory));
    let before = cache.snapshot();

    assert!(cache.access(4, &memory));
    assert_eq!(cache.snapshot(), before);
}

/// Reset empties every set and preserves the geometry.
#[test]
fn reset_clears_all_sets() {
    let memory = seeded_memory();
    let mut cache = default_cache();

    assert!(!cache.access(0, &memory));
    assert!(!cache.access(100, &memory));
    assert!(!cache.is_empty());

    cache.reset();
    assert!(cache.is_empty());
    assert_eq!(cache.num_sets(), 2);
    assert_eq!(cache.ways(), 2);

    // Post-reset accesses miss again.
    assert!(!cache.access(0, &memory));
}

/// Valid geometries produce the expected number of sets.
#[rstest]
#[case(16, 4, 2, 2)]
#[case(16, 4, 1, 4)]
#[case(32, 4, 2, 4)]
#[case(16, 1, 1, 16)]
fn geometry_set_counts(
    #[case] capacity: usize,
    #[case] block_words: usize,
    #[case] ways: usize,
    #[case] expected_sets: usize,
) {
    let cache = Cache::new(&CacheConfig {
        capacity,
        block_words,
        ways,
    })
    .unwrap();
    assert_eq!(cache.num_sets(), expected_sets);
}

/// Geometries that do not divide evenly (or divide by zero) are rejected at
/// construction; nothing is silently rounded.
#[rstest]
#[case(17, 4, 2)]
#[case(16, 3, 2)]
#[case(0, 4, 2)]
#[case(16, 0, 2)]
#[case(16, 4, 0)]
#[case(4, 4, 2)]
fn invalid_geometry_is_rejected(
    #[case] capacity: usize,
    #[case] block_words: usize,
    #[case] ways: usize,
) {
    let result = Cache::new(&CacheConfig {
        capacity,
        block_words,
        ways,
    });
    assert_eq!(
        result.err(),
        Some(SimError::InvalidCacheGeometry {
            capacity,
            block_words,
            ways
        })
    );
}

proptest! {
    /// Every word address maps to an in-range set, and accessing it never
    /// grows a set past the associativity.
    #[test]
    fn set_index_in_range_and_capacity_bounded(addresses in prop::collection::vec(0usize..1024, 1..64)) {
        let memory = seeded_memory();
        let mut cache = default_cache();

        for addr in addresses {
            prop_assert!(cache.set_index(addr) < cache.num_sets());
            let _ = cache.access(addr, &memory);
        }
        for set in cache.snapshot() {
            prop_assert!(set.len() <= cache.ways());
        }
    }
}
