//! Processor core implementation.
//!
//! This module contains the cycle-stepping engine and the components it
//! orchestrates: the pipeline slot array and the set-associative cache.

/// Set-associative cache with FIFO replacement.
pub mod cache;

/// The cycle-stepping pipeline engine.
pub mod engine;

/// Pipeline stage names and slot storage.
pub mod pipeline;

pub use self::engine::Engine;
pub use self::pipeline::Stage;
