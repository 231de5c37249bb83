//! Loads: register moves and immediates.

use crate::bus::Bus;
use crate::cpu::decode::{PairSlot, RegisterSlot};
use crate::cpu::{Cpu, CpuError};

impl<B: Bus> Cpu<B> {
    /// LD dst, src. Pure data movement, no flags.
    pub(super) fn exec_ld_slot_slot(
        &mut self,
        dst: RegisterSlot,
        src: RegisterSlot,
    ) -> Result<(), CpuError> {
        debug_assert!(
            !matches!((dst, src), (RegisterSlot::MemoryAtHl, RegisterSlot::MemoryAtHl)),
            "LD (HL), (HL) decodes as HALT"
        );
        let value = self.read_slot(src)?;
        self.write_slot(dst, value)
    }

    /// LD rr, nn.
    pub(super) fn exec_ld_pair_imm16(&mut self, pair: PairSlot) -> Result<(), CpuError> {
        let value = self.fetch16()?;
        self.write_pair(pair, value);
        Ok(())
    }

    /// LD r, n.
    pub(super) fn exec_ld_slot_imm8(&mut self, slot: RegisterSlot) -> Result<(), CpuError> {
        debug_assert!(
            !matches!(slot, RegisterSlot::MemoryAtHl),
            "the encoding has no LD (HL), n form"
        );
        let value = self.fetch8()?;
        self.write_slot(slot, value)
    }
}
