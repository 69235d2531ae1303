//! Pipeline stage names and slot storage.
//!
//! The pipeline is exactly five named positions, each holding at most one
//! in-flight instruction. Instructions move between slots only through the
//! shift operations here; the engine decides which shift applies each cycle.

use crate::common::constants::STAGE_COUNT;
use crate::isa::Instruction;

/// The five pipeline stages, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Write back.
    Wb,
}

impl Stage {
    /// All stages in program order.
    pub const ALL: [Self; STAGE_COUNT] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Slot-array index for this stage.
    pub const fn index(self) -> usize {
        match self {
            Self::If => 0,
            Self::Id => 1,
            Self::Ex => 2,
            Self::Mem => 3,
            Self::Wb => 4,
        }
    }

    /// Conventional stage abbreviation (`IF`, `ID`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

/// Slot storage for the five stages.
#[derive(Debug, Clone, Default)]
pub struct PipelineSlots {
    slots: [Option<Instruction>; STAGE_COUNT],
}

impl PipelineSlots {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// The instruction occupying a stage, if any.
    pub fn get(&self, stage: Stage) -> Option<&Instruction> {
        self.slots[stage.index()].as_ref()
    }

    /// Mutable access to the instruction occupying a stage.
    pub fn get_mut(&mut self, stage: Stage) -> Option<&mut Instruction> {
        self.slots[stage.index()].as_mut()
    }

    /// Replaces the contents of a stage slot.
    pub fn set(&mut self, stage: Stage, instruction: Option<Instruction>) {
        self.slots[stage.index()] = instruction;
    }

    /// Empties every slot (branch/jump/INT flush).
    pub fn flush(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Returns `true` when no stage holds an instruction.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Normal one-cycle shift: WB←MEM, MEM←EX, EX←ID, ID←IF, IF←`fetched`.
    pub fn advance(&mut self, fetched: Option<Instruction>) {
        self.slots[Stage::Wb.index()] = self.slots[Stage::Mem.index()].take();
        self.slots[Stage::Mem.index()] = self.slots[Stage::Ex.index()].take();
        self.slots[Stage::Ex.index()] = self.slots[Stage::Id.index()].take();
        self.slots[Stage::Id.index()] = self.slots[Stage::If.index()].take();
        self.slots[Stage::If.index()] = fetched;
    }

    /// Stall shift: WB←MEM and MEM←EX only; ID and IF stay put, EX drains.
    pub fn stall(&mut self) {
        self.slots[Stage::Wb.index()] = self.slots[Stage::Mem.index()].take();
        self.slots[Stage::Mem.index()] = self.slots[Stage::Ex.index()].take();
    }

    /// Owned occupancy snapshot in stage order IF, ID, EX, MEM, WB.
    pub fn snapshot(&self) -> [Option<Instruction>; STAGE_COUNT] {
        self.slots.clone()
    }
}
