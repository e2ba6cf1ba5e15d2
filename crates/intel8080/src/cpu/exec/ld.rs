use crate::cpu::{Cpu8080, Memory, Reg};

impl<M: Memory> Cpu8080<M> {
    /// MOV: destination in bits 5-3, source in bits 2-0.
    pub(super) fn exec_mov(&mut self, opcode: u8) {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_operand(src);
        self.write_operand(dst, value);
    }

    pub(super) fn exec_mvi(&mut self, opcode: u8) {
        let dst = (opcode >> 3) & 0x07;
        let value = self.fetch8();
        self.write_operand(dst, value);
    }

    pub(super) fn exec_lxi(&mut self, opcode: u8) {
        let value = self.fetch16();
        self.regs.set_pair(opcode >> 4, value);
    }

    fn indirect_pair(&self, opcode: u8) -> u16 {
        debug_assert!(matches!(opcode & 0xF0, 0x00 | 0x10));
        if opcode & 0x10 == 0 {
            self.regs.bc()
        } else {
            self.regs.de()
        }
    }

    /// LDAX B / LDAX D
    pub(super) fn exec_ldax(&mut self, opcode: u8) {
        let addr = self.indirect_pair(opcode);
        self.regs[Reg::A] = self.read8(addr);
    }

    /// STAX B / STAX D
    pub(super) fn exec_stax(&mut self, opcode: u8) {
        let addr = self.indirect_pair(opcode);
        self.write8(addr, self.regs[Reg::A]);
    }

    pub(super) fn exec_lda(&mut self) {
        let addr = self.fetch16();
        self.regs[Reg::A] = self.read8(addr);
    }

    pub(super) fn exec_sta(&mut self) {
        let addr = self.fetch16();
        self.write8(addr, self.regs[Reg::A]);
    }

    /// LHLD: L from addr, H from addr + 1.
    pub(super) fn exec_lhld(&mut self) {
        let addr = self.fetch16();
        let value = self.read16(addr);
        self.regs.set_hl(value);
    }

    /// SHLD: L to addr, H to addr + 1.
    pub(super) fn exec_shld(&mut self) {
        let addr = self.fetch16();
        self.write16(addr, self.regs.hl());
    }

    pub(super) fn exec_xchg(&mut self) {
        let de = self.regs.de();
        let hl = self.regs.hl();
        self.regs.set_de(hl);
        self.regs.set_hl(de);
    }
}
