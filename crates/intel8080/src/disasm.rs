//! Intel-syntax disassembler for a single 8080 instruction.
//!
//! Used for debug traces; execution never depends on it.

use std::fmt;

const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
const PAIRS: [&str; 4] = ["B", "D", "H", "SP"];
const STACK_PAIRS: [&str; 4] = ["B", "D", "H", "PSW"];
const CONDITIONS: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];
const ALU_REG: [&str; 8] = ["ADD", "ADC", "SUB", "SBB", "ANA", "XRA", "ORA", "CMP"];
const ALU_IMM: [&str; 8] = ["ADI", "ACI", "SUI", "SBI", "ANI", "XRI", "ORI", "CPI"];

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub addr: u16,
    pub bytes: Vec<u8>,
    pub mnemonic: String,
}

impl Instruction {
    /// Encoded length in bytes (1 to 3).
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: Vec<String> = self.bytes.iter().map(|b| format!("{b:02x}")).collect();
        write!(f, "{:04x}  {:<8}  {}", self.addr, hex.join(" "), self.mnemonic)
    }
}

/// Decode the instruction at `addr`.
///
/// Bytes past the end of `memory` read as zero, and addresses wrap at
/// 0xFFFF, so this never panics on truncated images.
pub fn disassemble(memory: &[u8], addr: u16) -> Instruction {
    let byte_at = |offset: u16| -> u8 {
        memory
            .get(addr.wrapping_add(offset) as usize)
            .copied()
            .unwrap_or(0)
    };

    let opcode = byte_at(0);
    let d8 = byte_at(1);
    let d16 = u16::from_le_bytes([byte_at(1), byte_at(2)]);
    let (mnemonic, size) = decode(opcode, d8, d16);

    Instruction {
        addr,
        bytes: (0..size).map(byte_at).collect(),
        mnemonic,
    }
}

fn decode(opcode: u8, d8: u8, d16: u16) -> (String, u16) {
    let dst = REGS[((opcode >> 3) & 0x07) as usize];
    let src = REGS[(opcode & 0x07) as usize];
    let rp = ((opcode >> 4) & 0x03) as usize;
    let cc = CONDITIONS[((opcode >> 3) & 0x07) as usize];

    let one = |s: String| (s, 1);
    let two = |s: String| (s, 2);
    let three = |s: String| (s, 3);

    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => one("NOP".into()),
        0xCB | 0xDD | 0xED | 0xFD => one("???".into()),

        0x02 => one("STAX B".into()),
        0x12 => one("STAX D".into()),
        0x0A => one("LDAX B".into()),
        0x1A => one("LDAX D".into()),
        0x22 => three(format!("SHLD ${d16:04x}")),
        0x2A => three(format!("LHLD ${d16:04x}")),
        0x32 => three(format!("STA ${d16:04x}")),
        0x3A => three(format!("LDA ${d16:04x}")),
        0x07 => one("RLC".into()),
        0x0F => one("RRC".into()),
        0x17 => one("RAL".into()),
        0x1F => one("RAR".into()),
        0x27 => one("DAA".into()),
        0x2F => one("CMA".into()),
        0x37 => one("STC".into()),
        0x3F => one("CMC".into()),
        0x76 => one("HLT".into()),

        0xC3 => three(format!("JMP ${d16:04x}")),
        0xCD => three(format!("CALL ${d16:04x}")),
        0xC9 | 0xD9 => one("RET".into()),
        0xD3 => two(format!("OUT ${d8:02x}")),
        0xDB => two(format!("IN ${d8:02x}")),
        0xE3 => one("XTHL".into()),
        0xE9 => one("PCHL".into()),
        0xEB => one("XCHG".into()),
        0xF3 => one("DI".into()),
        0xF9 => one("SPHL".into()),
        0xFB => one("EI".into()),

        op if op & 0xCF == 0x01 => three(format!("LXI {},${d16:04x}", PAIRS[rp])),
        op if op & 0xCF == 0x03 => one(format!("INX {}", PAIRS[rp])),
        op if op & 0xCF == 0x09 => one(format!("DAD {}", PAIRS[rp])),
        op if op & 0xCF == 0x0B => one(format!("DCX {}", PAIRS[rp])),
        op if op & 0xC7 == 0x04 => one(format!("INR {dst}")),
        op if op & 0xC7 == 0x05 => one(format!("DCR {dst}")),
        op if op & 0xC7 == 0x06 => two(format!("MVI {dst},${d8:02x}")),

        0x40..=0x7F => one(format!("MOV {dst},{src}")),
        0x80..=0xBF => one(format!("{} {src}", ALU_REG[((opcode >> 3) & 0x07) as usize])),

        op if op & 0xC7 == 0xC0 => one(format!("R{cc}")),
        op if op & 0xC7 == 0xC2 => three(format!("J{cc} ${d16:04x}")),
        op if op & 0xC7 == 0xC4 => three(format!("C{cc} ${d16:04x}")),
        op if op & 0xC7 == 0xC6 => two(format!(
            "{} ${d8:02x}",
            ALU_IMM[((opcode >> 3) & 0x07) as usize]
        )),
        op if op & 0xC7 == 0xC7 => one(format!("RST {}", (opcode >> 3) & 0x07)),
        op if op & 0xCF == 0xC1 => one(format!("POP {}", STACK_PAIRS[rp])),
        op if op & 0xCF == 0xC5 => one(format!("PUSH {}", STACK_PAIRS[rp])),

        _ => one("???".into()),
    }
}
