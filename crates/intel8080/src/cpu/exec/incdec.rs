use crate::cpu::{Cpu8080, Memory};

impl<M: Memory> Cpu8080<M> {
    pub(super) fn exec_inr(&mut self, opcode: u8) {
        let target = (opcode >> 3) & 0x07;
        let value = self.read_operand(target);
        let result = self.inr(value);
        self.write_operand(target, result);
    }

    pub(super) fn exec_dcr(&mut self, opcode: u8) {
        let target = (opcode >> 3) & 0x07;
        let value = self.read_operand(target);
        let result = self.dcr(value);
        self.write_operand(target, result);
    }

    // 16-bit increments touch no flags.
    pub(super) fn exec_inx(&mut self, opcode: u8) {
        let rp = opcode >> 4;
        let value = self.regs.pair(rp).wrapping_add(1);
        self.regs.set_pair(rp, value);
    }

    pub(super) fn exec_dcx(&mut self, opcode: u8) {
        let rp = opcode >> 4;
        let value = self.regs.pair(rp).wrapping_sub(1);
        self.regs.set_pair(rp, value);
    }
}
