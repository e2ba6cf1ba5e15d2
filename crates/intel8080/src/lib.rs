pub mod cpu;
pub mod disasm;
mod error;
pub mod memory;

pub use cpu::{
    CpuConfig, Cpu8080, Flags, InputHandler, OutputHandler, Reg, Registers, StatusBits, Trace,
    TraceObserver, CONDITIONAL_EXTRA_CYCLES, OP_CYCLES,
};
pub use error::StepError;
pub use memory::{FlatMemory, Memory};

/// Size of the 8080 address space in bytes (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;
