//! Pipelined processor simulator library.
//!
//! This crate implements a simplified five-stage pipelined processor, stepped one
//! clock cycle at a time, with the following:
//! 1. **Core:** Pipeline engine (fetch, decode, execute, memory, writeback), register
//!    file, main memory, and a set-associative cache with FIFO replacement.
//! 2. **ISA:** A nine-opcode instruction set (ALU, load/store, branches, jump, INT).
//! 3. **I/O:** An external interrupt controller and synchronous device stand-ins.
//! 4. **Simulation:** Benchmark programs, configuration, and statistics collection.
//!
//! The engine owns every piece of mutable state and exposes read-only snapshots for
//! display layers; one `step()` call advances exactly one clock cycle.

/// Common types (errors, system-wide constants).
pub mod common;
/// Simulator configuration (defaults, cache geometry, deserialization).
pub mod config;
/// Processor core (engine, pipeline slots, cache).
pub mod core;
/// I/O subsystem (interrupt controller, device stand-ins).
pub mod io;
/// Instruction set (opcodes and instruction records).
pub mod isa;
/// Benchmark programs.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main engine type; owns registers, memory, cache, pipeline, and counters.
pub use crate::core::Engine;
/// Crate-wide error type.
pub use crate::common::SimError;
