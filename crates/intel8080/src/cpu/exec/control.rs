use crate::cpu::{Cpu8080, Memory, CONDITIONAL_EXTRA_CYCLES};

impl<M: Memory> Cpu8080<M> {
    pub(super) fn exec_jmp(&mut self) {
        self.regs.pc = self.fetch16();
    }

    /// Jcc a16. The target word is always consumed, taken or not.
    pub(super) fn exec_jmp_cc(&mut self, opcode: u8) {
        let addr = self.fetch16();
        if self.condition(opcode >> 3) {
            self.regs.pc = addr;
        }
    }

    pub(super) fn exec_call(&mut self) {
        let addr = self.fetch16();
        self.call(addr);
    }

    pub(super) fn exec_call_cc(&mut self, opcode: u8) {
        let addr = self.fetch16();
        if self.condition(opcode >> 3) {
            self.call(addr);
            self.cycles += u64::from(CONDITIONAL_EXTRA_CYCLES);
        }
    }

    pub(super) fn exec_ret(&mut self) {
        self.regs.pc = self.pop16();
    }

    pub(super) fn exec_ret_cc(&mut self, opcode: u8) {
        if self.condition(opcode >> 3) {
            self.exec_ret();
            self.cycles += u64::from(CONDITIONAL_EXTRA_CYCLES);
        }
    }

    /// RST n: call to `n * 8`.
    pub(super) fn exec_rst(&mut self, opcode: u8) {
        self.call((opcode & 0x38) as u16);
    }

    pub(super) fn exec_pchl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// Push the return address and transfer control.
    pub(in crate::cpu) fn call(&mut self, addr: u16) {
        let ret = self.regs.pc;
        self.push16(ret);
        self.regs.pc = addr;
    }
}
