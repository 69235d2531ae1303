//! Simulation support: the static benchmark table.

/// Built-in benchmark programs.
pub mod benchmarks;

pub use benchmarks::Benchmark;
