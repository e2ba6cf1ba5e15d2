use std::fmt;

/// Errors surfaced by [`Cpu8080::step`](crate::Cpu8080::step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The fetched byte has no entry in the dispatch table.
    ///
    /// `pc` is the address the opcode was fetched from; the program counter
    /// itself has already moved past it.
    UnsupportedOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::UnsupportedOpcode { opcode, pc } => {
                write!(
                    f,
                    "unsupported opcode 0x{opcode:02x} at program counter {pc:04x}"
                )
            }
        }
    }
}

impl std::error::Error for StepError {}
