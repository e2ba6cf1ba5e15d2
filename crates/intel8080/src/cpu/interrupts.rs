use super::cycles::INTERRUPT_CYCLES;
use super::{Cpu8080, Memory};

impl<M: Memory> Cpu8080<M> {
    /// Request a maskable interrupt that transfers control to `addr`.
    ///
    /// Ignored while interrupts are disabled. When accepted, further
    /// interrupts are disabled, the current PC is pushed and execution
    /// continues at `addr`, costing the same as an unconditional CALL. An
    /// accepted interrupt also releases the CPU from `HLT`; the pushed return
    /// address is then the instruction after the `HLT`.
    ///
    /// Must only be called between steps.
    pub fn interrupt(&mut self, addr: u16) {
        if !self.interrupts_enabled {
            return;
        }

        log::trace!(
            "8080 interrupt: PC=0x{pc:04X} -> 0x{addr:04X}",
            pc = self.regs.pc
        );

        self.interrupts_enabled = false;
        if self.halted {
            // PC was rewound onto the HLT; return past it.
            self.regs.pc = self.regs.pc.wrapping_add(1);
            self.halted = false;
        }
        self.call(addr);
        self.cycles += u64::from(INTERRUPT_CYCLES);
    }

    /// Interrupt with the vector of `RST n`, i.e. `n * 8`.
    ///
    /// This is how 8080 systems usually raise interrupts: the interrupting
    /// device places an RST opcode on the data bus.
    pub fn interrupt_rst(&mut self, n: u8) {
        self.interrupt(u16::from(n & 0x07) << 3);
    }
}
