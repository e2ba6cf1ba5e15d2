use super::{Cpu8080, Flags, Memory, Reg, Registers};
use crate::disasm;

/// Observer called with a [`Trace`] for every decoded instruction.
pub type TraceObserver = Box<dyn FnMut(&Trace) + Send>;

/// CPU state captured right after an opcode is fetched.
///
/// `pc` is the address of the opcode; `registers.pc` has already moved past
/// it. Flags and registers are the values the instruction will see.
#[derive(Clone, Copy, Debug)]
pub struct Trace {
    pub pc: u16,
    pub opcode: u8,
    pub registers: Registers,
    pub flags: Flags,
    pub cycles: u64,
}

impl<M: Memory> Cpu8080<M> {
    pub(super) fn trace(&mut self, pc: u16, opcode: u8) {
        let trace = Trace {
            pc,
            opcode,
            registers: self.regs,
            flags: self.flags,
            cycles: self.cycles,
        };

        if self.config.debug && log::log_enabled!(log::Level::Debug) {
            let instruction = disasm::disassemble(self.memory.read_all(), pc);
            let regs = &trace.registers;
            log::debug!(
                "{instruction}\tCY={}\tAC={}\tZ={}\tP={}\tS={}\tSP={:04x}\tA={:02x}\tB={:02x}\tC={:02x}\tD={:02x}\tE={:02x}\tH={:02x}\tL={:02x}",
                u8::from(trace.flags.cy),
                u8::from(trace.flags.ac),
                u8::from(trace.flags.z),
                u8::from(trace.flags.p),
                u8::from(trace.flags.s),
                regs.sp,
                regs[Reg::A],
                regs[Reg::B],
                regs[Reg::C],
                regs[Reg::D],
                regs[Reg::E],
                regs[Reg::H],
                regs[Reg::L],
            );
        }

        if let Some(observer) = self.config.observer.as_mut() {
            observer(&trace);
        }
    }
}
