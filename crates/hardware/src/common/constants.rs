//! System-wide constants.
//!
//! Fixed values that describe the simulated machine rather than a tunable
//! configuration knob; everything configurable lives in [`crate::config`].

/// Destination register of the injected interrupt service instruction.
///
/// When the internal pending flag is set, the next cycle injects
/// `LD r10, 99` directly into the IF slot. Register 10 is reserved by
/// convention for the service routine.
pub const SERVICE_REGISTER: usize = 10;

/// Memory address read by the injected interrupt service instruction.
pub const SERVICE_ADDRESS: i64 = 99;

/// Number of leading memory words seeded with `memory[i] = i` on program load.
///
/// Deterministic demo data: every benchmark starts from the same memory image.
pub const SEED_WORDS: usize = 260;

/// Number of pipeline stages (IF, ID, EX, MEM, WB).
pub const STAGE_COUNT: usize = 5;
