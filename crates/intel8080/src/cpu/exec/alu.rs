use crate::cpu::{Cpu8080, Memory};

impl<M: Memory> Cpu8080<M> {
    /// Apply one of the eight accumulator operations selected by bits 5-3.
    fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.accumulator_add(value, 0),
            1 => self.accumulator_add(value, self.flags.carry_byte()),
            2 => self.accumulator_sub(value, 0),
            3 => self.accumulator_sub(value, self.flags.carry_byte()),
            4 => self.ana(value),
            5 => self.xra(value),
            6 => self.ora(value),
            _ => self.cmp(value),
        }
    }

    pub(super) fn exec_alu_reg_group(&mut self, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_operand(opcode & 0x07);
        self.alu_op(opcode >> 3, value);
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) {
        debug_assert!(opcode & 0xC7 == 0xC6);
        let value = self.fetch8();
        self.alu_op(opcode >> 3, value);
    }

    /// RLC / RRC / RAL / RAR, selected by bits 4-3.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        match (opcode >> 3) & 0x03 {
            0 => self.rlc(),
            1 => self.rrc(),
            2 => self.ral(),
            _ => self.rar(),
        }
    }

    pub(super) fn exec_dad(&mut self, opcode: u8) {
        match (opcode >> 4) & 0x03 {
            0 => self.dad(self.regs.bc()),
            1 => self.dad(self.regs.de()),
            2 => self.dad(self.regs.hl()),
            _ => self.dad_sp(),
        }
    }
}
