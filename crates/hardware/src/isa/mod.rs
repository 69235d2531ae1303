//! Instruction set definitions.
//!
//! This module defines the simulated machine's nine-opcode instruction set:
//! 1. **Opcodes:** A closed enum with exhaustive, compiler-checked handling
//!    in every pipeline stage.
//! 2. **Instructions:** Immutable operand fields plus one mutable scratch
//!    result written during EX or MEM and committed at WB.
//!
//! Operand arity is a per-opcode convention, not a validated schema: absent
//! fields read as "no operand" where a stage can tolerate it, and fail fast
//! where it cannot (see [`crate::common::SimError::MissingOperand`]).

/// Instruction record with optional operand fields.
pub mod instruction;

/// Opcode definitions and per-opcode predicates.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::Opcode;
