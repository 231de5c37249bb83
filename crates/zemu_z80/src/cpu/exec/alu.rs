//! Arithmetic, logic and flag instructions.

use crate::bus::Bus;
use crate::cpu::decode::{PairSlot, RegisterSlot};
use crate::cpu::{Cpu, CpuError, Flag};

impl<B: Bus> Cpu<B> {
    /// ADD A, slot and ADC A, slot.
    pub(super) fn exec_add_a(
        &mut self,
        src: RegisterSlot,
        with_carry: bool,
    ) -> Result<(), CpuError> {
        let value = self.read_slot(src)?;
        self.alu_add(value, with_carry);
        Ok(())
    }

    /// SUB A, slot and SBC A, slot.
    pub(super) fn exec_sub_a(
        &mut self,
        src: RegisterSlot,
        with_carry: bool,
    ) -> Result<(), CpuError> {
        let value = self.read_slot(src)?;
        self.alu_sub(value, with_carry);
        Ok(())
    }

    /// ADD A, n and ADC A, n.
    pub(super) fn exec_add_a_imm(&mut self, with_carry: bool) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_add(value, with_carry);
        Ok(())
    }

    /// SUB A, n and SBC A, n.
    pub(super) fn exec_sub_a_imm(&mut self, with_carry: bool) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_sub(value, with_carry);
        Ok(())
    }

    pub(super) fn exec_and_imm(&mut self) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_and(value);
        Ok(())
    }

    pub(super) fn exec_xor_imm(&mut self) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_xor(value);
        Ok(())
    }

    pub(super) fn exec_or_imm(&mut self) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_or(value);
        Ok(())
    }

    /// CP n. A is left untouched, only the flags move.
    pub(super) fn exec_cp_imm(&mut self) -> Result<(), CpuError> {
        let value = self.fetch8()?;
        self.alu_cp(value);
        Ok(())
    }

    /// ADD HL, rr.
    pub(super) fn exec_add_hl_pair(&mut self, pair: PairSlot) -> Result<(), CpuError> {
        let value = self.read_pair(pair);
        self.alu_add16_hl(value);
        Ok(())
    }

    /// SCF. Sets C, clears N and H, leaves S, Z and PV alone.
    pub(super) fn exec_scf(&mut self) -> Result<(), CpuError> {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        Ok(())
    }
}
