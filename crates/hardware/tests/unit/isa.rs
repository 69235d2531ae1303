//! Opcode and instruction record tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pipesim_core::isa::{Instruction, Opcode};

/// Exactly the arithmetic and load opcodes commit a result at WB.
#[rstest]
#[case(Opcode::Add, true)]
#[case(Opcode::Sub, true)]
#[case(Opcode::Mul, true)]
#[case(Opcode::Ld, true)]
#[case(Opcode::St, false)]
#[case(Opcode::Beq, false)]
#[case(Opcode::Bne, false)]
#[case(Opcode::Jmp, false)]
#[case(Opcode::Int, false)]
fn writeback_set_is_exact(#[case] opcode: Opcode, #[case] writes_back: bool) {
    assert_eq!(opcode.writes_back(), writes_back);
}

/// Constructors fill exactly the fields their opcode convention expects.
#[test]
fn constructors_follow_operand_conventions() {
    let ld = Instruction::ld(1, 8);
    assert_eq!((ld.rd, ld.rs1, ld.rs2, ld.imm), (Some(1), None, None, Some(8)));

    let st = Instruction::st(3, 8);
    assert_eq!((st.rd, st.rs1, st.imm), (None, Some(3), Some(8)));

    let add = Instruction::alu(Opcode::Add, 3, 1, 2);
    assert_eq!((add.rd, add.rs1, add.rs2, add.imm), (Some(3), Some(1), Some(2), None));

    let beq = Instruction::branch(Opcode::Beq, 1, 2, -4);
    assert_eq!((beq.rs1, beq.rs2, beq.imm), (Some(1), Some(2), Some(-4)));

    let int = Instruction::int();
    assert_eq!((int.rd, int.rs1, int.rs2, int.imm), (None, None, None, None));
}

/// The display form reads like compact assembly.
#[test]
fn display_renders_compact_assembly() {
    assert_eq!(Instruction::ld(1, 4).to_string(), "LD r1, 4");
    assert_eq!(Instruction::alu(Opcode::Add, 3, 1, 2).to_string(), "ADD r3, r1, r2");
    assert_eq!(Instruction::st(3, 8).to_string(), "ST r3, 8");
    assert_eq!(Instruction::branch(Opcode::Bne, 1, 2, -4).to_string(), "BNE r1, r2, -4");
    assert_eq!(Instruction::int().to_string(), "INT");
    assert_eq!(Instruction::jmp(7).to_string(), "JMP 7");
}
