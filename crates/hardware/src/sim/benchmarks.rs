//! Built-in benchmark programs.
//!
//! Three fixed instruction sequences exercising different machine behavior
//! against the deterministic memory seed (`memory[i] = i` for the leading
//! words):
//! 1. **Sequential:** five loads from consecutive block-aligned addresses.
//! 2. **Random:** five loads from scattered addresses (stresses set mapping).
//! 3. **Arithmetic:** loads feeding an add, a store, and a multiply.

use std::fmt;
use std::str::FromStr;

use crate::isa::{Instruction, Opcode};

/// The static benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Benchmark {
    /// Five loads from addresses 0, 4, 8, 12, 16.
    Sequential,
    /// Five loads from scattered addresses.
    Random,
    /// Load/load/add/store/multiply dependency chain.
    Arithmetic,
}

impl Benchmark {
    /// Every built-in benchmark.
    pub const ALL: [Self; 3] = [Self::Sequential, Self::Random, Self::Arithmetic];

    /// Stable name used by the CLI and display layers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
            Self::Arithmetic => "arithmetic",
        }
    }

    /// Builds a fresh copy of the benchmark's instruction sequence.
    pub fn program(self) -> Vec<Instruction> {
        match self {
            Self::Sequential => vec![
                Instruction::ld(1, 0),
                Instruction::ld(2, 4),
                Instruction::ld(3, 8),
                Instruction::ld(4, 12),
                Instruction::ld(5, 16),
            ],
            Self::Random => vec![
                Instruction::ld(1, 100),
                Instruction::ld(2, 250),
                Instruction::ld(3, 30),
                Instruction::ld(4, 75),
                Instruction::ld(5, 10),
            ],
            Self::Arithmetic => vec![
                Instruction::ld(1, 0),
                Instruction::ld(2, 4),
                Instruction::alu(Opcode::Add, 3, 1, 2),
                Instruction::st(3, 8),
                Instruction::alu(Opcode::Mul, 4, 3, 1),
            ],
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = String;

    /// Parses a benchmark by its stable name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown benchmark `{s}` (expected sequential, random, or arithmetic)"))
    }
}
