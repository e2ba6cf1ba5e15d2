use std::ops::{Index, IndexMut};

/// 8-bit registers, numbered the way opcode bit fields encode them.
///
/// Index 6 is `M` (the byte at HL) in opcodes and never names a register;
/// in the register file it is an unused slot where the flags would sit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    A = 7,
}

/// Register file of the 8080.
///
/// BC, DE and HL are views over the byte registers, high byte first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    r: [u8; 8],
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Read a register by its 3-bit opcode encoding.
    #[inline]
    pub fn by_index(&self, index: u8) -> u8 {
        self.r[(index & 0x07) as usize]
    }

    #[inline]
    pub fn set_by_index(&mut self, index: u8, value: u8) {
        self.r[(index & 0x07) as usize] = value;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self[Reg::B], self[Reg::C]])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self[Reg::B] = b;
        self[Reg::C] = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self[Reg::D], self[Reg::E]])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self[Reg::D] = d;
        self[Reg::E] = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self[Reg::H], self[Reg::L]])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self[Reg::H] = h;
        self[Reg::L] = l;
    }

    /// Read the pair selected by bits 5-4 of an opcode: BC, DE, HL, SP.
    #[inline]
    pub fn pair(&self, rp: u8) -> u16 {
        match rp & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub fn set_pair(&mut self, rp: u8, value: u16) {
        match rp & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }
}

impl Index<Reg> for Registers {
    type Output = u8;

    fn index(&self, reg: Reg) -> &u8 {
        &self.r[reg as usize]
    }
}

impl IndexMut<Reg> for Registers {
    fn index_mut(&mut self, reg: Reg) -> &mut u8 {
        &mut self.r[reg as usize]
    }
}
