//! Simulation statistics collection and reporting.
//!
//! Tracks the engine's counters (clock cycles, cache hits, cache misses) and
//! derives the hit rate. All counters reset together on program load.

/// Cycle and cache counters for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total clock cycles stepped.
    pub cycles: u64,
    /// Cache hits observed by the memory stage.
    pub cache_hits: u64,
    /// Cache misses observed by the memory stage.
    pub cache_misses: u64,
}

impl SimStats {
    /// Total cache accesses (hits plus misses).
    pub const fn cache_accesses(&self) -> u64 {
        self.cache_hits + self.cache_misses
    }

    /// Fraction of cache accesses that hit, or 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_accesses();
        if total == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / total as f64
    }

    /// Prints a plain-text statistics report to stdout.
    pub fn print(&self) {
        println!("==========================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================");
        println!("sim_cycles           {}", self.cycles);
        println!("cache.hits           {}", self.cache_hits);
        println!("cache.misses         {}", self.cache_misses);
        println!("cache.hit_rate       {:.2}%", self.hit_rate() * 100.0);
        println!("==========================================");
    }
}
