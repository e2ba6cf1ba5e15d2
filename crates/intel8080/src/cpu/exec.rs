mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Cpu8080, Memory, StepError};

impl<M: Memory> Cpu8080<M> {
    /// Decode and execute a single opcode.
    ///
    /// The base cycle cost has already been charged by `step`; handlers only
    /// add cycles for taken conditional calls and returns. Register-indexed
    /// forms share one handler that decodes the operand from the opcode bits.
    pub(super) fn exec_opcode(&mut self, opcode: u8) -> Result<(), StepError> {
        match opcode {
            // NOP, plus the undocumented encodings that behave like it.
            0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => {}

            // LXI rp, d16
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_lxi(opcode),

            // STAX B / STAX D
            0x02 | 0x12 => self.exec_stax(opcode),

            // LDAX B / LDAX D
            0x0A | 0x1A => self.exec_ldax(opcode),

            // SHLD a16 / LHLD a16
            0x22 => self.exec_shld(),
            0x2A => self.exec_lhld(),

            // STA a16 / LDA a16
            0x32 => self.exec_sta(),
            0x3A => self.exec_lda(),

            // INX rp / DCX rp
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inx(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dcx(opcode),

            // INR r / DCR r (including M)
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inr(opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dcr(opcode),

            // MVI r, d8 (including M)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => self.exec_mvi(opcode),

            // DAD rp
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_dad(opcode),

            // RLC / RRC / RAL / RAR
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            0x27 => self.daa(),
            0x2F => self.cma(),
            0x37 => self.exec_stc(),
            0x3F => self.exec_cmc(),

            // HLT sits in the middle of the MOV block.
            0x76 => self.exec_hlt(),

            // MOV r1, r2 (including M on either side)
            0x40..=0x7F => self.exec_mov(opcode),

            // ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP r
            0x80..=0xBF => self.exec_alu_reg_group(opcode),

            // ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(opcode),

            // JMP a16 / Jcc a16
            0xC3 => self.exec_jmp(),
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => self.exec_jmp_cc(opcode),

            // CALL a16 / Ccc a16
            0xCD => self.exec_call(),
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => self.exec_call_cc(opcode),

            // RET (0xD9 is an undocumented alias) / Rcc
            0xC9 | 0xD9 => self.exec_ret(),
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => self.exec_ret_cc(opcode),

            // RST n
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(opcode),

            0xE9 => self.exec_pchl(),

            // PUSH rp / POP rp (rp 3 is PSW)
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(opcode),

            0xE3 => self.exec_xthl(),
            0xEB => self.exec_xchg(),
            0xF9 => self.exec_sphl(),

            0xDB => self.exec_in(),
            0xD3 => self.exec_out(),

            0xF3 => self.exec_di(),
            0xFB => self.exec_ei(),

            // 0xCB, 0xDD, 0xED, 0xFD
            _ => {
                let pc = self.regs.pc.wrapping_sub(1);
                log::warn!("8080: unsupported opcode 0x{opcode:02X} at PC=0x{pc:04X}");
                return Err(StepError::UnsupportedOpcode { opcode, pc });
            }
        }

        Ok(())
    }
}
