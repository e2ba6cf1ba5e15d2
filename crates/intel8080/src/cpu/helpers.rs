use super::{Cpu8080, Memory};

/// Operand index that selects memory at HL instead of a register.
pub(super) const OPERAND_M: u8 = 6;

impl<M: Memory> Cpu8080<M> {
    #[inline]
    pub(super) fn read8(&self, addr: u16) -> u8 {
        self.memory.read8(addr)
    }

    #[inline]
    pub(super) fn write8(&mut self, addr: u16, value: u8) {
        self.memory.write8(addr, value);
    }

    /// Read a little-endian word from memory.
    #[inline]
    pub(super) fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// Read the byte at PC and advance PC by one.
    ///
    /// Opcodes, immediate bytes and immediate words are all consumed through
    /// this helper.
    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read the next two bytes at PC as a little-endian word.
    #[inline]
    pub(super) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word: SP drops by two, low byte lands at the new SP.
    #[inline]
    pub(super) fn push16(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.write16(self.regs.sp, value);
    }

    #[inline]
    pub(super) fn pop16(&mut self) -> u16 {
        let value = self.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Read a source operand by its 3-bit encoding: B, C, D, E, H, L, M, A.
    #[inline]
    pub(super) fn read_operand(&self, index: u8) -> u8 {
        if index == OPERAND_M {
            self.read8(self.regs.hl())
        } else {
            self.regs.by_index(index)
        }
    }

    /// Write a destination operand by its 3-bit encoding.
    #[inline]
    pub(super) fn write_operand(&mut self, index: u8, value: u8) {
        if index == OPERAND_M {
            self.write8(self.regs.hl(), value);
        } else {
            self.regs.set_by_index(index, value);
        }
    }

    /// Evaluate a condition encoded in bits 5-3 of a jump/call/return.
    ///
    /// NZ, Z, NC, C, PO, PE, P, M.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x07 {
            0 => !self.flags.z,
            1 => self.flags.z,
            2 => !self.flags.cy,
            3 => self.flags.cy,
            4 => !self.flags.p,
            5 => self.flags.p,
            6 => !self.flags.s,
            _ => self.flags.s,
        }
    }
}
