//! Opcode definitions.

use std::fmt;

/// The nine operations the simulated machine understands.
///
/// Expected operands per opcode (by convention, not enforced up front):
///
/// | Opcode        | rd | rs1 | rs2 | imm                    |
/// |---------------|----|-----|-----|------------------------|
/// | `Add`/`Sub`/`Mul` | ✓ | ✓  | opt | fallback for rs2      |
/// | `Ld`          | ✓  |     |     | word address           |
/// | `St`          |    | ✓   |     | word address           |
/// | `Beq`/`Bne`   |    | ✓   | ✓   | branch displacement    |
/// | `Jmp`         |    |     |     | absolute target        |
/// | `Int`         |    |     |     |                        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Integer addition: `rd = rs1 + (rs2 | imm)`.
    Add,
    /// Integer subtraction: `rd = rs1 - (rs2 | imm)`.
    Sub,
    /// Integer multiplication: `rd = rs1 * (rs2 | imm)`.
    Mul,
    /// Load a word from memory at `imm` into `rd` (through the cache).
    Ld,
    /// Store the word in `rs1` to memory at `imm` (bypassing the cache).
    St,
    /// Branch by `imm` when `rs1 == rs2`.
    Beq,
    /// Branch by `imm` when `rs1 != rs2`.
    Bne,
    /// Jump to the absolute target `imm`.
    Jmp,
    /// Raise the internal interrupt pending flag.
    Int,
}

impl Opcode {
    /// Returns `true` for opcodes that commit a result to the register
    /// file during the writeback stage.
    pub const fn writes_back(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Ld)
    }

    /// Returns `true` for the three ALU opcodes executed in EX.
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul)
    }

    /// Returns the assembly mnemonic for this opcode.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Jmp => "JMP",
            Self::Int => "INT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
