//! Minimal CP/M environment for running 8080 `.COM` programs.
//!
//! Only what the classic CPU diagnostics need is emulated: the program is
//! loaded into the TPA at 0x0100, address 0x0000 jumps to it, and calls to
//! the BDOS entry point at 0x0005 are intercepted for console output.
//! Returning to 0x0000 (warm boot) ends the run.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use intel8080::{Cpu8080, CpuConfig, FlatMemory, Memory, Reg, MEMORY_SIZE};
use typed_builder::TypedBuilder;


/// Start of the transient program area, where `.COM` files are loaded.
pub const TPA_START: u16 = 0x0100;
/// BDOS entry point programs `CALL` into.
pub const BDOS_ENTRY: u16 = 0x0005;
/// Warm boot vector; reaching it means the program has exited.
pub const WARM_BOOT: u16 = 0x0000;

const BDOS_CONSOLE_OUTPUT: u8 = 0x02;
const BDOS_PRINT_STRING: u8 = 0x09;

const OP_JMP: u8 = 0xC3;
const OP_RET: u8 = 0xC9;

#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct CpmOptions {
    /// Copy console output to stdout as it is produced.
    #[builder(default)]
    pub echo: bool,
    /// Enable the CPU's per-instruction debug trace.
    #[builder(default)]
    pub debug: bool,
}

/// Result of a program that returned to the warm boot vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Everything written through the BDOS console functions.
    pub output: String,
    pub cycles: u64,
    pub steps: u64,
}

pub struct CpmMachine {
    cpu: Cpu8080<FlatMemory>,
    echo: bool,
}

impl CpmMachine {
    pub fn new(program: &[u8], options: CpmOptions) -> Result<Self> {
        let capacity = MEMORY_SIZE - TPA_START as usize;
        if program.len() > capacity {
            bail!(
                "program is {} bytes but only {} bytes fit above 0x{:04x}",
                program.len(),
                capacity,
                TPA_START
            );
        }

        let mut memory = FlatMemory::new();
        memory.load(TPA_START, program);

        let [lo, hi] = TPA_START.to_le_bytes();
        memory.load(WARM_BOOT, &[OP_JMP, lo, hi]);
        memory.write8(BDOS_ENTRY, OP_RET);

        let config = CpuConfig::builder().debug(options.debug).build();
        let cpu = Cpu8080::with_config(memory, config);

        Ok(Self {
            cpu,
            echo: options.echo,
        })
    }

    pub fn cpu(&self) -> &Cpu8080<FlatMemory> {
        &self.cpu
    }

    /// Run until the program jumps back to the warm boot vector.
    ///
    /// Fails if the CPU halts, decodes an unsupported opcode, or has not
    /// finished after `max_steps` instructions.
    pub fn run(&mut self, max_steps: u64) -> Result<RunReport> {
        let start_cycles = self.cpu.cycles();
        let mut report = RunReport::default();

        loop {
            if !self.cpu.running() {
                bail!("CPU halted at 0x{:04x}", self.cpu.pc());
            }
            if report.steps >= max_steps {
                bail!(
                    "step limit of {} reached at 0x{:04x}",
                    max_steps,
                    self.cpu.pc()
                );
            }

            self.cpu
                .step()
                .with_context(|| format!("program stopped after {} steps", report.steps))?;
            report.steps += 1;

            if self.cpu.pc() == BDOS_ENTRY {
                self.bdos_call(&mut report.output)?;
            }
            if self.cpu.pc() == WARM_BOOT {
                break;
            }
        }

        report.cycles = self.cpu.cycles() - start_cycles;
        log::debug!(
            "CP/M program finished: {} steps, {} cycles",
            report.steps,
            report.cycles
        );
        Ok(report)
    }

    /// Handle the console BDOS functions; the `RET` at the entry point
    /// returns to the caller on the next step.
    fn bdos_call(&mut self, output: &mut String) -> Result<()> {
        let regs = self.cpu.registers();
        let text = match regs[Reg::C] {
            BDOS_PRINT_STRING => self.read_string(regs.de()),
            BDOS_CONSOLE_OUTPUT => char::from(regs[Reg::E]).to_string(),
            function => {
                log::debug!("ignoring BDOS function {function}");
                return Ok(());
            }
        };

        if self.echo {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        output.push_str(&text);
        Ok(())
    }

    /// Read a `$`-terminated string. Stops after one pass over memory if the
    /// terminator is missing.
    fn read_string(&self, start: u16) -> String {
        let memory = self.cpu.memory();
        let mut text = String::new();
        let mut addr = start;
        for _ in 0..MEMORY_SIZE {
            let byte = memory.read8(addr);
            if byte == b'$' {
                break;
            }
            text.push(char::from(byte));
            addr = addr.wrapping_add(1);
        }
        text
    }
}
