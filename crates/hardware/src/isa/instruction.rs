//! Instruction records.
//!
//! An [`Instruction`] is an opcode plus optional operand fields, all fixed at
//! construction, and one mutable `result` scratch word. The engine clones
//! instructions out of the loaded program into pipeline slots, so the scratch
//! result travels with the in-flight copy rather than the program image.

use std::fmt;

use crate::isa::Opcode;

/// One instruction: immutable operands plus a mutable scratch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Destination register, if the opcode produces one.
    pub rd: Option<usize>,
    /// First source register.
    pub rs1: Option<usize>,
    /// Second source register; ALU opcodes fall back to `imm` when absent.
    pub rs2: Option<usize>,
    /// Immediate; meaning depends on the opcode (word address, branch
    /// displacement, or absolute jump target).
    pub imm: Option<i64>,
    /// Scratch result written during EX or MEM and committed at WB.
    pub result: i64,
}

impl Instruction {
    /// Creates an instruction with no operands.
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            rd: None,
            rs1: None,
            rs2: None,
            imm: None,
            result: 0,
        }
    }

    /// Register-register ALU instruction: `rd = rs1 op rs2`.
    pub const fn alu(opcode: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        Self {
            opcode,
            rd: Some(rd),
            rs1: Some(rs1),
            rs2: Some(rs2),
            imm: None,
            result: 0,
        }
    }

    /// Register-immediate ALU instruction: `rd = rs1 op imm`.
    pub const fn alu_imm(opcode: Opcode, rd: usize, rs1: usize, imm: i64) -> Self {
        Self {
            opcode,
            rd: Some(rd),
            rs1: Some(rs1),
            rs2: None,
            imm: Some(imm),
            result: 0,
        }
    }

    /// Load: `rd = memory[addr]`.
    pub const fn ld(rd: usize, addr: i64) -> Self {
        Self {
            opcode: Opcode::Ld,
            rd: Some(rd),
            rs1: None,
            rs2: None,
            imm: Some(addr),
            result: 0,
        }
    }

    /// Store: `memory[addr] = rs1`.
    pub const fn st(rs1: usize, addr: i64) -> Self {
        Self {
            opcode: Opcode::St,
            rd: None,
            rs1: Some(rs1),
            rs2: None,
            imm: Some(addr),
            result: 0,
        }
    }

    /// Conditional branch by `displacement` comparing `rs1` and `rs2`.
    pub const fn branch(opcode: Opcode, rs1: usize, rs2: usize, displacement: i64) -> Self {
        Self {
            opcode,
            rd: None,
            rs1: Some(rs1),
            rs2: Some(rs2),
            imm: Some(displacement),
            result: 0,
        }
    }

    /// Unconditional jump to the absolute target.
    pub const fn jmp(target: i64) -> Self {
        Self {
            opcode: Opcode::Jmp,
            rd: None,
            rs1: None,
            rs2: None,
            imm: Some(target),
            result: 0,
        }
    }

    /// Software interrupt request.
    pub const fn int() -> Self {
        Self::new(Opcode::Int)
    }
}

impl fmt::Display for Instruction {
    /// Renders a compact assembly-like form, e.g. `LD r1, 4` or `ADD r3, r1, r2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        let mut sep = " ";
        if let Some(rd) = self.rd {
            write!(f, "{sep}r{rd}")?;
            sep = ", ";
        }
        if let Some(rs1) = self.rs1 {
            write!(f, "{sep}r{rs1}")?;
            sep = ", ";
        }
        if let Some(rs2) = self.rs2 {
            write!(f, "{sep}r{rs2}")?;
            sep = ", ";
        }
        if let Some(imm) = self.imm {
            write!(f, "{sep}{imm}")?;
        }
        Ok(())
    }
}
