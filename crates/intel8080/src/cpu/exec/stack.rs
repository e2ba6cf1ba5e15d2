use crate::cpu::{Cpu8080, Memory, Reg};

impl<M: Memory> Cpu8080<M> {
    /// PUSH B/D/H/PSW. PSW is A in the high byte, packed flags in the low.
    pub(super) fn exec_push(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => u16::from_be_bytes([self.regs[Reg::A], self.flags.status()]),
        };
        self.push16(value);
    }

    pub(super) fn exec_pop(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop16();
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => {
                let [a, status] = value.to_be_bytes();
                self.regs[Reg::A] = a;
                self.flags.set_status(status);
            }
        }
    }

    /// Swap HL with the word at the top of the stack; SP is unchanged.
    pub(super) fn exec_xthl(&mut self) {
        let sp = self.regs.sp;
        let top = self.read16(sp);
        let hl = self.regs.hl();
        self.write16(sp, hl);
        self.regs.set_hl(top);
    }

    pub(super) fn exec_sphl(&mut self) {
        self.regs.sp = self.regs.hl();
    }
}
