//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! engine. It provides:
//! 1. **Defaults:** Baseline machine constants (register count, memory size,
//!    cache geometry).
//! 2. **Structures:** Hierarchical config for the core and the cache.
//! 3. **Validation:** Cache geometry is checked at engine construction and
//!    never silently rounded.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or use
//! `Config::default()`.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
///
/// These values match the reference machine: 32 registers, 1024 memory
/// words, and a 16-word, 2-way cache with 4-word blocks.
mod defaults {
    /// Number of general-purpose registers.
    pub const REGISTER_COUNT: usize = 32;

    /// Main memory size in words.
    pub const MEMORY_WORDS: usize = 1024;

    /// Total cache capacity in words.
    pub const CACHE_CAPACITY: usize = 16;

    /// Cache block size in words.
    ///
    /// Block size participates in set/tag addressing math only; a cache line
    /// stores the single word at the accessed address.
    pub const CACHE_BLOCK_WORDS: usize = 4;

    /// Cache associativity (lines per set).
    pub const CACHE_WAYS: usize = 2;
}

/// Root configuration structure containing all engine settings.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.core.register_count, 32);
/// assert_eq!(config.cache.ways, 2);
///
/// let config = Config::from_json(r#"{ "cache": { "capacity": 32, "ways": 4 } }"#)?;
/// assert_eq!(config.cache.capacity, 32);
/// assert_eq!(config.core.memory_words, 1024);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Core sizing (register file, main memory).
    pub core: CoreConfig,
    /// Cache geometry.
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Absent fields take their defaults, so `{}` is a valid document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheGeometry`] when the cache parameters
    /// do not divide into a whole, non-zero number of sets.
    pub fn validate(&self) -> Result<(), SimError> {
        let _ = self.cache.num_sets()?;
        Ok(())
    }
}

/// Core sizing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Number of general-purpose registers.
    pub register_count: usize,
    /// Main memory size in words.
    pub memory_words: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            register_count: defaults::REGISTER_COUNT,
            memory_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Cache geometry configuration.
///
/// `num_sets = capacity / (block_words * ways)` and the division must be
/// exact: a geometry that does not divide evenly is invalid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Total capacity in words.
    pub capacity: usize,
    /// Block size in words (addressing math only; lines store one word).
    pub block_words: usize,
    /// Associativity: lines per set, evicted in insertion order when full.
    pub ways: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_CAPACITY,
            block_words: defaults::CACHE_BLOCK_WORDS,
            ways: defaults::CACHE_WAYS,
        }
    }
}

impl CacheConfig {
    /// Computes the number of sets this geometry describes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheGeometry`] when any parameter is zero
    /// or `capacity` is not evenly divisible by `block_words * ways`.
    pub fn num_sets(&self) -> Result<usize, SimError> {
        let err = SimError::InvalidCacheGeometry {
            capacity: self.capacity,
            block_words: self.block_words,
            ways: self.ways,
        };
        let line_words = self
            .block_words
            .checked_mul(self.ways)
            .filter(|w| *w > 0)
            .ok_or_else(|| err.clone())?;
        if self.capacity == 0 || self.capacity % line_words != 0 {
            return Err(err);
        }
        Ok(self.capacity / line_words)
    }
}
