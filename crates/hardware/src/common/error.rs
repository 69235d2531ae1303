//! Error definitions for the simulator.
//!
//! This module defines the crate-wide error type. It covers:
//! 1. **Configuration errors:** Invalid cache geometry, rejected at construction.
//! 2. **Precondition violations:** Out-of-range registers or addresses and
//!    malformed instructions, reported to the caller instead of masked.
//!
//! Fetching past the end of the program is deliberately NOT an error: it yields
//! "no instruction", which is the normal pipeline-drain mechanism.

use thiserror::Error;

use crate::isa::Opcode;

/// Errors produced by engine construction and cycle stepping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The cache geometry does not divide into a whole number of sets.
    ///
    /// `capacity / (block_words * ways)` must be exact and non-zero; a zero
    /// parameter is the same invalid-geometry class (it would divide by zero).
    /// The configuration is never silently rounded.
    #[error(
        "invalid cache geometry: capacity {capacity} words, block {block_words} words, \
         {ways} ways does not divide into a whole number of sets"
    )]
    InvalidCacheGeometry {
        /// Total cache capacity in words.
        capacity: usize,
        /// Words per cache line for addressing purposes.
        block_words: usize,
        /// Associativity (lines per set).
        ways: usize,
    },

    /// A stage touched a register index outside the register file.
    #[error("register index {index} out of range (register file holds {count})")]
    RegisterOutOfRange {
        /// The offending register index.
        index: usize,
        /// Size of the register file.
        count: usize,
    },

    /// A memory access or snapshot window fell outside main memory.
    #[error("address {address} out of range (memory holds {size} words)")]
    AddressOutOfRange {
        /// The offending word address.
        address: i64,
        /// Size of main memory in words.
        size: usize,
    },

    /// A taken branch or jump produced a negative program counter.
    #[error("control transfer produced negative PC ({pc})")]
    NegativePc {
        /// The out-of-range PC value that would have resulted.
        pc: i64,
    },

    /// An instruction reached a stage that needs an operand it does not carry.
    #[error("{opcode} is missing its {field} operand")]
    MissingOperand {
        /// Opcode of the malformed instruction.
        opcode: Opcode,
        /// Name of the absent field (`"rd"`, `"rs1"`, `"imm"`, ...).
        field: &'static str,
    },
}
