//! PUSH and POP.

use crate::bus::Bus;
use crate::cpu::decode::StackPair;
use crate::cpu::{Cpu, CpuError};

impl<B: Bus> Cpu<B> {
    /// PUSH rr. High byte first, so the low byte lands at the lower
    /// address.
    pub(super) fn exec_push_pair(&mut self, pair: StackPair) -> Result<(), CpuError> {
        let value = self.read_stack_pair(pair);
        self.push_u16(value)
    }

    /// POP rr. Popping into AF rewrites every bit of F, the two unused
    /// bits included.
    pub(super) fn exec_pop_pair(&mut self, pair: StackPair) -> Result<(), CpuError> {
        let value = self.pop_u16()?;
        self.write_stack_pair(pair, value);
        Ok(())
    }
}
