use super::{Cpu8080, Memory, Reg};

impl<M: Memory> Cpu8080<M> {
    /// A + value + carry, computed wide so bit 8 is the carry out.
    ///
    /// Backs ADD/ADC/ADI/ACI and DAA.
    pub(super) fn accumulator_add(&mut self, value: u8, carry: u8) {
        let a = self.regs[Reg::A];
        let wide = a as u16 + value as u16 + carry as u16;
        let result = wide as u8;

        self.flags.set_zsp(result);
        self.flags.cy = (wide & 0x100) != 0;
        self.flags.ac = ((a ^ result ^ value) & 0x10) != 0;
        self.regs[Reg::A] = result;
    }

    /// A - value - borrow. Backs SUB/SBB/SUI/SBI.
    pub(super) fn accumulator_sub(&mut self, value: u8, borrow: u8) {
        let result = self.subtract(value, borrow);
        self.regs[Reg::A] = result;
    }

    /// Flag side of a subtraction from A; the result is returned, not stored.
    ///
    /// Auxiliary carry is the inverted half-carry: the 8080 sets it when
    /// there is no borrow out of bit 3.
    fn subtract(&mut self, value: u8, borrow: u8) -> u8 {
        let a = self.regs[Reg::A];
        let wide = (a as u16)
            .wrapping_sub(value as u16)
            .wrapping_sub(borrow as u16);
        let result = wide as u8;

        self.flags.set_zsp(result);
        self.flags.cy = (wide & 0x100) != 0;
        self.flags.ac = (!(a ^ result ^ value) & 0x10) != 0;
        result
    }

    /// Compare: subtract without storing.
    pub(super) fn cmp(&mut self, value: u8) {
        self.subtract(value, 0);
    }

    pub(super) fn ana(&mut self, value: u8) {
        let a = self.regs[Reg::A];
        let result = a & value;
        self.flags.cy = false;
        // The 8080 sets AC from bit 3 of the operands rather than clearing it.
        self.flags.ac = ((a | value) & 0x08) != 0;
        self.flags.set_zsp(result);
        self.regs[Reg::A] = result;
    }

    pub(super) fn xra(&mut self, value: u8) {
        let result = self.regs[Reg::A] ^ value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(result);
        self.regs[Reg::A] = result;
    }

    pub(super) fn ora(&mut self, value: u8) {
        let result = self.regs[Reg::A] | value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(result);
        self.regs[Reg::A] = result;
    }

    /// Increment; carry is left alone.
    pub(super) fn inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.set_zsp(result);
        self.flags.ac = (result & 0x0F) == 0;
        result
    }

    /// Decrement; carry is left alone.
    pub(super) fn dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.set_zsp(result);
        self.flags.ac = (result & 0x0F) != 0x0F;
        result
    }

    /// HL += value. Only carry is affected.
    pub(super) fn dad(&mut self, value: u16) {
        let wide = self.regs.hl() as u32 + value as u32;
        self.flags.cy = (wide & 0x1_0000) != 0;
        self.regs.set_hl(wide as u16);
    }

    pub(super) fn dad_sp(&mut self) {
        self.dad(self.regs.sp);
    }

    /// Decimal adjust A after a BCD addition.
    pub(super) fn daa(&mut self) {
        let a = self.regs[Reg::A];
        let lsb = a & 0x0F;
        let msb = a >> 4;
        let mut adjust = 0u8;
        let mut carry = self.flags.cy;

        if lsb > 9 || self.flags.ac {
            adjust += 0x06;
        }
        if msb > 9 || self.flags.cy || (msb >= 9 && lsb > 9) {
            adjust += 0x60;
            carry = true;
        }

        self.accumulator_add(adjust, 0);
        self.flags.set_parity(self.regs[Reg::A]);
        self.flags.cy = carry;
    }

    /// Rotate A left; bit 7 goes to both carry and bit 0.
    pub(super) fn rlc(&mut self) {
        let a = self.regs[Reg::A];
        self.flags.cy = (a & 0x80) != 0;
        self.regs[Reg::A] = a.rotate_left(1);
    }

    /// Rotate A right; bit 0 goes to both carry and bit 7.
    pub(super) fn rrc(&mut self) {
        let a = self.regs[Reg::A];
        self.flags.cy = (a & 0x01) != 0;
        self.regs[Reg::A] = a.rotate_right(1);
    }

    /// Rotate A left through carry.
    pub(super) fn ral(&mut self) {
        let a = self.regs[Reg::A];
        let carry_in = self.flags.carry_byte();
        self.flags.cy = (a & 0x80) != 0;
        self.regs[Reg::A] = (a << 1) | carry_in;
    }

    /// Rotate A right through carry.
    pub(super) fn rar(&mut self) {
        let a = self.regs[Reg::A];
        let carry_in = self.flags.carry_byte() << 7;
        self.flags.cy = (a & 0x01) != 0;
        self.regs[Reg::A] = (a >> 1) | carry_in;
    }

    pub(super) fn cma(&mut self) {
        self.regs[Reg::A] = !self.regs[Reg::A];
    }
}
