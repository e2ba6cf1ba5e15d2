use crate::MEMORY_SIZE;

/// Memory boundary used by the 8080 core.
///
/// The CPU only ever reads and writes single bytes through this trait. The
/// full backing store is exposed for diagnostics (disassembly in trace
/// output); the execution engine itself never looks at it.
///
/// Implementations must be total over the whole 16-bit address range.
pub trait Memory {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
    fn read_all(&self) -> &[u8];
}

/// Flat 64 KiB RAM with no mapping or write protection.
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Copy `data` into memory starting at `offset`.
    ///
    /// Bytes that would land past 0xFFFF are dropped; the number of bytes
    /// actually written is returned.
    pub fn load(&mut self, offset: u16, data: &[u8]) -> usize {
        let start = offset as usize;
        let len = data.len().min(MEMORY_SIZE - start);
        self.bytes[start..start + len].copy_from_slice(&data[..len]);
        len
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for FlatMemory {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    fn read_all(&self) -> &[u8] {
        &self.bytes
    }
}
