//! Increments and decrements, 8-bit with flags and 16-bit without.

use crate::bus::Bus;
use crate::cpu::decode::{PairSlot, RegisterSlot};
use crate::cpu::{Cpu, CpuError};

impl<B: Bus> Cpu<B> {
    /// INC slot. For the memory slot this is a read-modify-write
    /// through the bus at HL.
    pub(super) fn exec_inc8_slot(&mut self, slot: RegisterSlot) -> Result<(), CpuError> {
        let value = self.read_slot(slot)?;
        let result = self.alu_inc8(value);
        self.write_slot(slot, result)
    }

    /// DEC slot. Same shape as INC.
    pub(super) fn exec_dec8_slot(&mut self, slot: RegisterSlot) -> Result<(), CpuError> {
        let value = self.read_slot(slot)?;
        let result = self.alu_dec8(value);
        self.write_slot(slot, result)
    }

    /// INC rr. Wraps silently and leaves F alone.
    pub(super) fn exec_inc16_pair(&mut self, pair: PairSlot) -> Result<(), CpuError> {
        let value = self.read_pair(pair);
        self.write_pair(pair, value.wrapping_add(1));
        Ok(())
    }

    /// DEC rr. Wraps silently and leaves F alone.
    pub(super) fn exec_dec16_pair(&mut self, pair: PairSlot) -> Result<(), CpuError> {
        let value = self.read_pair(pair);
        self.write_pair(pair, value.wrapping_sub(1));
        Ok(())
    }
}
