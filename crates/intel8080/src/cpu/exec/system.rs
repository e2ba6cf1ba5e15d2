use crate::cpu::{Cpu8080, Memory, Reg};

impl<M: Memory> Cpu8080<M> {
    pub(super) fn exec_ei(&mut self) {
        self.interrupts_enabled = true;
    }

    pub(super) fn exec_di(&mut self) {
        self.interrupts_enabled = false;
    }

    /// HLT rewinds PC onto itself so further steps re-execute the halt.
    pub(super) fn exec_hlt(&mut self) {
        self.regs.pc = self.regs.pc.wrapping_sub(1);
        self.halted = true;
    }

    pub(super) fn exec_stc(&mut self) {
        self.flags.cy = true;
    }

    pub(super) fn exec_cmc(&mut self) {
        self.flags.cy = !self.flags.cy;
    }

    /// IN port. Without an input handler A is left untouched.
    pub(super) fn exec_in(&mut self) {
        let port = self.fetch8();
        if let Some(input) = self.config.input.as_mut() {
            self.regs[Reg::A] = input(port);
        }
    }

    pub(super) fn exec_out(&mut self) {
        let port = self.fetch8();
        let a = self.regs[Reg::A];
        if let Some(output) = self.config.output.as_mut() {
            output(port, a);
        }
    }
}
