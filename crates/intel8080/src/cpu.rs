mod alu;
mod cycles;
mod exec;
mod flags;
mod helpers;
mod interrupts;
mod regs;
mod trace;


use typed_builder::TypedBuilder;

use crate::error::StepError;
use crate::memory::Memory;

pub use cycles::{CONDITIONAL_EXTRA_CYCLES, OP_CYCLES};
pub use flags::{Flags, StatusBits};
pub use regs::{Reg, Registers};
pub use trace::{Trace, TraceObserver};

/// Handler for `IN port`: maps the port byte to the value loaded into A.
pub type InputHandler = Box<dyn FnMut(u8) -> u8 + Send>;

/// Handler for `OUT port`: receives the port byte and the accumulator.
pub type OutputHandler = Box<dyn FnMut(u8, u8) + Send>;

/// Construction options for [`Cpu8080`].
///
/// Every option is optional; `CpuConfig::default()` gives a silent CPU with
/// no IO devices attached, where `IN`/`OUT` only consume their operand.
///
/// ```
/// use intel8080::{CpuConfig, Cpu8080, FlatMemory};
///
/// let config = CpuConfig::builder()
///     .debug(true)
///     .input(Box::new(|port: u8| port.wrapping_add(1)))
///     .build();
/// let cpu = Cpu8080::with_config(FlatMemory::new(), config);
/// assert!(cpu.running());
/// ```
#[derive(Default, TypedBuilder)]
pub struct CpuConfig {
    /// Log a disassembly and register dump line (`log::debug!`) for every
    /// decoded instruction.
    #[builder(default)]
    pub debug: bool,
    #[builder(default, setter(strip_option))]
    pub input: Option<InputHandler>,
    #[builder(default, setter(strip_option))]
    pub output: Option<OutputHandler>,
    /// Called after each opcode is decoded, before it executes.
    #[builder(default, setter(strip_option))]
    pub observer: Option<TraceObserver>,
}

/// Intel 8080 CPU.
///
/// Owns the register file, condition flags, interrupt and halt state, the
/// cycle counter and the memory boundary. Execution happens one instruction
/// at a time through [`Cpu8080::step`]; interrupts are only injected between
/// steps through [`Cpu8080::interrupt`].
pub struct Cpu8080<M> {
    regs: Registers,
    flags: Flags,
    interrupts_enabled: bool,
    halted: bool,
    cycles: u64,
    memory: M,
    config: CpuConfig,
}

impl<M: Memory> Cpu8080<M> {
    /// Create a CPU in reset state with no IO handlers attached.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            flags: Flags::default(),
            interrupts_enabled: false,
            halted: false,
            cycles: 0,
            memory,
            config,
        }
    }

    /// Reset registers, flags and counters to their power-on values.
    ///
    /// Memory contents and configured handlers are preserved.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.flags = Flags::default();
        self.interrupts_enabled = false;
        self.halted = false;
        self.cycles = 0;
    }

    /// Execute a single instruction and return the number of cycles consumed.
    ///
    /// The opcode's table cost is charged as soon as it is fetched, so a
    /// failed decode still advances both the program counter and the cycle
    /// counter.
    pub fn step(&mut self) -> Result<u32, StepError> {
        let start = self.cycles;
        let pc = self.regs.pc;
        let opcode = self.fetch8();
        self.cycles += u64::from(OP_CYCLES[opcode as usize]);

        if self.config.debug || self.config.observer.is_some() {
            self.trace(pc, opcode);
        }

        self.exec_opcode(opcode)?;
        Ok((self.cycles - start) as u32)
    }

    /// Total cycles consumed since construction or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn accumulator(&self) -> u8 {
        self.regs[Reg::A]
    }

    /// True unless a `HLT` has been executed.
    pub fn running(&self) -> bool {
        !self.halted
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn set_sp(&mut self, sp: u16) {
        self.regs.sp = sp;
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn into_memory(self) -> M {
        self.memory
    }
}
