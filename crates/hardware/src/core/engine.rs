//! The cycle-stepping pipeline engine.
//!
//! This module implements the orchestrator that owns every piece of mutable
//! state: register file, main memory, cache, pipeline slots, program counter,
//! and counters. One [`Engine::step`] call advances exactly one clock cycle.
//!
//! Within a cycle, side effects are applied in a fixed precedence order so
//! that no stage reads a value produced later in the same cycle:
//! 1. **Interrupt entry:** A pending internal interrupt injects the service
//!    instruction into IF and consumes the whole cycle.
//! 2. **WB commit:** Arithmetic/load results reach the register file.
//! 3. **MEM access:** Loads consult the cache; stores write memory now.
//! 4. **EX execute:** ALU results, and control transfers that flush the
//!    pipeline and consume the cycle.
//! 5. **Hazard check:** The single detected RAW pattern (ID.rs1 vs EX.rd)
//!    stalls the front half of the pipeline for one cycle.
//! 6. **Normal advance:** Fetch and shift every slot forward.

use crate::common::SimError;
use crate::common::constants::{SEED_WORDS, SERVICE_ADDRESS, SERVICE_REGISTER, STAGE_COUNT};
use crate::config::Config;
use crate::core::cache::{Cache, CacheLine};
use crate::core::pipeline::{PipelineSlots, Stage};
use crate::isa::{Instruction, Opcode};
use crate::stats::SimStats;

/// What the execute stage did with the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExOutcome {
    /// Fall through to hazard check and normal advance.
    Continue,
    /// A control transfer (or INT) flushed the pipeline; the cycle is over.
    Flushed,
}

/// The pipeline engine: owns all mutable machine state.
///
/// Strictly step-driven and single-threaded; callers serialize `step()`
/// themselves. All accessors hand out read-only snapshots; no mutable
/// reference to internal state ever escapes.
#[derive(Debug, Clone)]
pub struct Engine {
    registers: Vec<i64>,
    memory: Vec<i64>,
    cache: Cache,
    pipeline: PipelineSlots,
    program: Vec<Instruction>,
    pc: usize,
    interrupt_pending: bool,
    stats: SimStats,
}

impl Engine {
    /// Builds an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCacheGeometry`] when the cache parameters
    /// do not divide into a whole number of sets.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            registers: vec![0; config.core.register_count],
            memory: vec![0; config.core.memory_words],
            cache: Cache::new(&config.cache)?,
            pipeline: PipelineSlots::new(),
            program: Vec::new(),
            pc: 0,
            interrupt_pending: false,
            stats: SimStats::default(),
        })
    }

    /// Loads a program and resets the whole machine.
    ///
    /// PC, cycle counter, hit/miss counters, and the pending flag go to
    /// zero; the pipeline empties; every register and memory word is zeroed;
    /// then the leading memory words are seeded with `memory[i] = i` and the
    /// cache is cleared.
    pub fn load_program(&mut self, program: Vec<Instruction>) {
        self.program = program;
        self.pc = 0;
        self.interrupt_pending = false;
        self.stats = SimStats::default();
        self.pipeline.flush();
        self.registers.fill(0);
        self.memory.fill(0);
        for (i, word) in self.memory.iter_mut().take(SEED_WORDS).enumerate() {
            *word = i as i64;
        }
        self.cache.reset();
        tracing::debug!(len = self.program.len(), "program loaded, state reset");
    }

    /// Advances the machine by exactly one clock cycle.
    ///
    /// # Errors
    ///
    /// Reports precondition violations instead of masking them: register or
    /// address out of range, a control transfer producing a negative PC, or
    /// an instruction missing an operand its stage needs. The cycle counter
    /// is not incremented on a failed step.
    pub fn step(&mut self) -> Result<(), SimError> {
        // 1. Interrupt entry: inject the service instruction into IF only and
        //    consume the cycle. Does not re-fire; the flag is cleared here.
        if self.interrupt_pending {
            tracing::debug!("servicing internal interrupt");
            self.pipeline.set(
                Stage::If,
                Some(Instruction::ld(SERVICE_REGISTER, SERVICE_ADDRESS)),
            );
            self.interrupt_pending = false;
            self.stats.cycles += 1;
            return Ok(());
        }

        // 2. WB commit.
        self.commit_writeback()?;

        // 3. MEM access.
        self.access_memory()?;

        // 4. EX execute; control transfers end the cycle here.
        if self.execute()? == ExOutcome::Flushed {
            self.stats.cycles += 1;
            return Ok(());
        }

        // 5. The single detected RAW hazard: ID.rs1 against EX.rd.
        if self.hazard_detected() {
            tracing::trace!("RAW hazard between ID and EX, stalling");
            self.pipeline.stall();
            self.stats.cycles += 1;
            return Ok(());
        }

        // 6. Normal advance.
        let fetched = self.fetch_next();
        self.pipeline.advance(fetched);
        self.stats.cycles += 1;
        Ok(())
    }

    /// Run-to-completion predicate: every slot empty and PC past the end of
    /// the program.
    pub fn is_finished(&self) -> bool {
        self.pipeline.is_empty() && self.pc >= self.program.len()
    }

    /// Raises the internal pending flag.
    ///
    /// This is the hook for a caller honoring a tag popped from the external
    /// interrupt queue; the next `step()` will inject the service
    /// instruction. The EX stage sets the same flag for the `INT` opcode.
    pub fn raise_interrupt(&mut self) {
        self.interrupt_pending = true;
    }

    /// Whether an internal interrupt is waiting for the next cycle.
    pub const fn interrupt_pending(&self) -> bool {
        self.interrupt_pending
    }

    /// Read-only view of the register file.
    pub fn registers(&self) -> &[i64] {
        &self.registers
    }

    /// Read-only window into main memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] when the window does not fit
    /// inside memory.
    pub fn memory_window(&self, start: usize, len: usize) -> Result<&[i64], SimError> {
        let end = start.checked_add(len).ok_or(SimError::AddressOutOfRange {
            address: start as i64,
            size: self.memory.len(),
        })?;
        self.memory
            .get(start..end)
            .ok_or(SimError::AddressOutOfRange {
                address: start as i64,
                size: self.memory.len(),
            })
    }

    /// Owned per-set, per-line cache view for display layers.
    pub fn cache_snapshot(&self) -> Vec<Vec<CacheLine>> {
        self.cache.snapshot()
    }

    /// The instruction occupying a pipeline stage, if any.
    pub fn stage(&self, stage: Stage) -> Option<&Instruction> {
        self.pipeline.get(stage)
    }

    /// Owned occupancy snapshot in stage order IF, ID, EX, MEM, WB.
    pub fn pipeline_snapshot(&self) -> [Option<Instruction>; STAGE_COUNT] {
        self.pipeline.snapshot()
    }

    /// Current program counter.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Cycle and cache hit/miss counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Number of instructions in the loaded program.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    // ───────────────────────── cycle phases ─────────────────────────

    /// WB commit: arithmetic and load results reach the register file.
    fn commit_writeback(&mut self) -> Result<(), SimError> {
        let Some(instr) = self.pipeline.get(Stage::Wb) else {
            return Ok(());
        };
        if !instr.opcode.writes_back() {
            return Ok(());
        }
        let rd = instr.rd.ok_or(SimError::MissingOperand {
            opcode: instr.opcode,
            field: "rd",
        })?;
        if rd >= self.registers.len() {
            return Err(SimError::RegisterOutOfRange {
                index: rd,
                count: self.registers.len(),
            });
        }
        self.registers[rd] = instr.result;
        Ok(())
    }

    /// MEM access: loads consult the cache; stores write memory immediately.
    fn access_memory(&mut self) -> Result<(), SimError> {
        let Some(instr) = self.pipeline.get(Stage::Mem) else {
            return Ok(());
        };
        match instr.opcode {
            Opcode::Ld => {
                let address = Self::word_address(instr.opcode, instr.imm, self.memory.len())?;
                let hit = self.cache.access(address, &self.memory);
                if hit {
                    self.stats.cache_hits += 1;
                } else {
                    self.stats.cache_misses += 1;
                }
                let word = self.memory[address];
                if let Some(instr) = self.pipeline.get_mut(Stage::Mem) {
                    instr.result = word;
                }
            }
            Opcode::St => {
                let address = Self::word_address(instr.opcode, instr.imm, self.memory.len())?;
                let rs1 = instr.rs1.ok_or(SimError::MissingOperand {
                    opcode: instr.opcode,
                    field: "rs1",
                })?;
                let value = self.read_register(rs1)?;
                self.memory[address] = value;
            }
            // Every other opcode passes through MEM untouched.
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Beq
            | Opcode::Bne
            | Opcode::Jmp
            | Opcode::Int => {}
        }
        Ok(())
    }

    /// EX execute: ALU results, branches, jump, and INT.
    fn execute(&mut self) -> Result<ExOutcome, SimError> {
        let Some(instr) = self.pipeline.get(Stage::Ex) else {
            return Ok(ExOutcome::Continue);
        };
        let (opcode, rs1, rs2, imm) = (instr.opcode, instr.rs1, instr.rs2, instr.imm);

        match opcode {
            Opcode::Add | Opcode::Sub | Opcode::Mul => {
                let a = self.first_operand(rs1)?;
                let b = self.second_operand(opcode, rs2, imm)?;
                let result = match opcode {
                    Opcode::Add => a.wrapping_add(b),
                    Opcode::Sub => a.wrapping_sub(b),
                    _ => a.wrapping_mul(b),
                };
                if let Some(instr) = self.pipeline.get_mut(Stage::Ex) {
                    instr.result = result;
                }
                Ok(ExOutcome::Continue)
            }
            Opcode::Beq | Opcode::Bne => {
                let a = self.first_operand(rs1)?;
                let b = self.second_operand(opcode, rs2, imm)?;
                let taken = match opcode {
                    Opcode::Beq => a == b,
                    _ => a != b,
                };
                if !taken {
                    return Ok(ExOutcome::Continue);
                }
                let displacement = imm.ok_or(SimError::MissingOperand {
                    opcode,
                    field: "imm",
                })?;
                let target = self.pc as i64 + displacement;
                if target < 0 {
                    return Err(SimError::NegativePc { pc: target });
                }
                tracing::trace!(pc = target, "branch taken, pipeline flushed");
                self.pc = target as usize;
                self.pipeline.flush();
                Ok(ExOutcome::Flushed)
            }
            Opcode::Jmp => {
                let target = imm.ok_or(SimError::MissingOperand {
                    opcode,
                    field: "imm",
                })?;
                if target < 0 {
                    return Err(SimError::NegativePc { pc: target });
                }
                tracing::trace!(pc = target, "jump taken, pipeline flushed");
                self.pc = target as usize;
                self.pipeline.flush();
                Ok(ExOutcome::Flushed)
            }
            Opcode::Int => {
                tracing::debug!("INT executed, internal interrupt scheduled");
                self.interrupt_pending = true;
                self.pipeline.flush();
                Ok(ExOutcome::Flushed)
            }
            // Loads and stores pass through EX untouched.
            Opcode::Ld | Opcode::St => Ok(ExOutcome::Continue),
        }
    }

    /// The single detected RAW pattern: ID's first source register equals
    /// EX's destination register. No rs2 check, no MEM/WB forwarding.
    fn hazard_detected(&self) -> bool {
        match (self.pipeline.get(Stage::Id), self.pipeline.get(Stage::Ex)) {
            (Some(id), Some(ex)) => {
                matches!((id.rs1, ex.rd), (Some(src), Some(dst)) if src == dst)
            }
            _ => false,
        }
    }

    /// Fetches the instruction at PC, or `None` past the end of the program.
    /// Running off the end is the normal drain mechanism, not an error.
    fn fetch_next(&mut self) -> Option<Instruction> {
        let instr = self.program.get(self.pc).cloned()?;
        self.pc += 1;
        Some(instr)
    }

    // ───────────────────────── operand helpers ─────────────────────────

    /// First EX operand: `rs1` when present, otherwise zero.
    fn first_operand(&self, rs1: Option<usize>) -> Result<i64, SimError> {
        rs1.map_or(Ok(0), |index| self.read_register(index))
    }

    /// Second EX operand: `rs2` when present, falling back to the immediate.
    fn second_operand(
        &self,
        opcode: Opcode,
        rs2: Option<usize>,
        imm: Option<i64>,
    ) -> Result<i64, SimError> {
        match (rs2, imm) {
            (Some(index), _) => self.read_register(index),
            (None, Some(imm)) => Ok(imm),
            (None, None) => Err(SimError::MissingOperand {
                opcode,
                field: "rs2 or imm",
            }),
        }
    }

    /// Bounds-checked register read.
    fn read_register(&self, index: usize) -> Result<i64, SimError> {
        self.registers
            .get(index)
            .copied()
            .ok_or(SimError::RegisterOutOfRange {
                index,
                count: self.registers.len(),
            })
    }

    /// Resolves an LD/ST immediate to an in-range word address.
    fn word_address(opcode: Opcode, imm: Option<i64>, size: usize) -> Result<usize, SimError> {
        let imm = imm.ok_or(SimError::MissingOperand {
            opcode,
            field: "imm",
        })?;
        if imm < 0 || imm as usize >= size {
            return Err(SimError::AddressOutOfRange { address: imm, size });
        }
        Ok(imm as usize)
    }
}
