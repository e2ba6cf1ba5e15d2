use bitflags::bitflags;

bitflags! {
    /// Bit layout of the flags byte in the processor status word.
    ///
    /// Bits 3 and 5 are always zero and bit 1 is always one; they do not
    /// correspond to any condition flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StatusBits: u8 {
        const SIGN = 0x80;
        const ZERO = 0x40;
        const AUX_CARRY = 0x10;
        const PARITY = 0x04;
        const ALWAYS_ONE = 0x02;
        const CARRY = 0x01;
    }
}

/// Condition flags of the 8080.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    /// Parity is set when the byte has an even number of one bits.
    #[inline]
    pub fn set_parity(&mut self, value: u8) {
        self.p = value.count_ones() % 2 == 0;
    }

    /// Zero, sign and parity from a result byte.
    #[inline]
    pub fn set_zsp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = (value & 0x80) != 0;
        self.set_parity(value);
    }

    /// The carry flag as 0 or 1, for ADC/SBB style operations.
    #[inline]
    pub fn carry_byte(&self) -> u8 {
        u8::from(self.cy)
    }

    /// Pack the flags into the low byte of the PSW.
    pub fn status(&self) -> u8 {
        let mut bits = StatusBits::ALWAYS_ONE;
        bits.set(StatusBits::SIGN, self.s);
        bits.set(StatusBits::ZERO, self.z);
        bits.set(StatusBits::AUX_CARRY, self.ac);
        bits.set(StatusBits::PARITY, self.p);
        bits.set(StatusBits::CARRY, self.cy);
        bits.bits()
    }

    /// Unpack a PSW low byte. Reserved bits are ignored.
    pub fn set_status(&mut self, value: u8) {
        let bits = StatusBits::from_bits_truncate(value);
        self.s = bits.contains(StatusBits::SIGN);
        self.z = bits.contains(StatusBits::ZERO);
        self.ac = bits.contains(StatusBits::AUX_CARRY);
        self.p = bits.contains(StatusBits::PARITY);
        self.cy = bits.contains(StatusBits::CARRY);
    }

    pub fn from_status(value: u8) -> Self {
        let mut flags = Self::default();
        flags.set_status(value);
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_matches_popcount_for_every_byte() {
        let mut flags = Flags::default();
        for value in 0..=u8::MAX {
            flags.set_parity(value);
            assert_eq!(flags.p, value.count_ones() % 2 == 0, "value {value:#04x}");
        }
    }

    #[test]
    fn status_sets_fixed_bits() {
        assert_eq!(Flags::default().status(), 0x02);

        let all = Flags {
            z: true,
            s: true,
            p: true,
            cy: true,
            ac: true,
        };
        assert_eq!(all.status(), 0xD7);
    }

    #[test]
    fn status_round_trips_all_flag_combinations() {
        for mask in 0u8..32 {
            let flags = Flags {
                z: mask & 0x01 != 0,
                s: mask & 0x02 != 0,
                p: mask & 0x04 != 0,
                cy: mask & 0x08 != 0,
                ac: mask & 0x10 != 0,
            };
            assert_eq!(Flags::from_status(flags.status()), flags);
        }
    }

    #[test]
    fn set_status_ignores_reserved_bits() {
        let flags = Flags::from_status(0x28);
        assert_eq!(flags, Flags::default());
        assert_eq!(flags.status(), 0x02);
    }

    #[test]
    fn carry_byte_folds_carry() {
        let mut flags = Flags::default();
        assert_eq!(flags.carry_byte(), 0);
        flags.cy = true;
        assert_eq!(flags.carry_byte(), 1);
    }
}
