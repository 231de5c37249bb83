//! Bus access, instruction fetch, stack moves and operand slot plumbing.

use crate::bus::Bus;
use crate::cpu::decode::{PairSlot, RegisterSlot, StackPair};
use crate::cpu::{Cpu, CpuError};

impl<B: Bus> Cpu<B> {
    #[inline]
    pub(super) fn bus_read8(&mut self, addr: u16) -> Result<u8, CpuError> {
        let bus = self.bus.as_mut().ok_or(CpuError::NotConnected)?;
        Ok(bus.read8(addr))
    }

    #[inline]
    pub(super) fn bus_write8(&mut self, addr: u16, value: u8) -> Result<(), CpuError> {
        let bus = self.bus.as_mut().ok_or(CpuError::NotConnected)?;
        bus.write8(addr, value);
        Ok(())
    }

    /// Reads the byte at PC and advances PC past it.
    #[inline]
    pub fn fetch8(&mut self) -> Result<u8, CpuError> {
        let value = self.bus_read8(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads the little-endian word at PC and advances PC past it.
    #[inline]
    pub fn fetch16(&mut self) -> Result<u16, CpuError> {
        let lo = self.fetch8()? as u16;
        let hi = self.fetch8()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Pushes one byte: SP moves down, then the byte is stored at the
    /// new SP. SP is only committed once the write has gone through.
    #[inline]
    pub fn push_u8(&mut self, value: u8) -> Result<(), CpuError> {
        let sp = self.regs.sp.wrapping_sub(1);
        self.bus_write8(sp, value)?;
        self.regs.sp = sp;
        Ok(())
    }

    /// Pops one byte: reads at SP, then SP moves up.
    #[inline]
    pub fn pop_u8(&mut self) -> Result<u8, CpuError> {
        let value = self.bus_read8(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(value)
    }

    /// Pushes a word high byte first, so the low byte lands at the lower
    /// address and the stack stays little-endian in memory.
    #[inline]
    pub fn push_u16(&mut self, value: u16) -> Result<(), CpuError> {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        self.push_u8(hi)?;
        self.push_u8(lo)?;
        Ok(())
    }

    /// Pops a word, low byte first. Mirrors [`push_u16`](Self::push_u16).
    #[inline]
    pub fn pop_u16(&mut self) -> Result<u16, CpuError> {
        let lo = self.pop_u8()? as u16;
        let hi = self.pop_u8()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Reads an 8-bit operand slot. The memory slot goes through the
    /// bus at the address in HL; every other slot is a register read.
    #[inline]
    pub(super) fn read_slot(&mut self, slot: RegisterSlot) -> Result<u8, CpuError> {
        Ok(match slot {
            RegisterSlot::B => self.regs.b,
            RegisterSlot::C => self.regs.c,
            RegisterSlot::D => self.regs.d,
            RegisterSlot::E => self.regs.e,
            RegisterSlot::H => self.regs.h,
            RegisterSlot::L => self.regs.l,
            RegisterSlot::MemoryAtHl => self.bus_read8(self.regs.hl())?,
            RegisterSlot::A => self.regs.a,
        })
    }

    /// Writes an 8-bit operand slot. Counterpart of
    /// [`read_slot`](Self::read_slot).
    #[inline]
    pub(super) fn write_slot(&mut self, slot: RegisterSlot, value: u8) -> Result<(), CpuError> {
        match slot {
            RegisterSlot::B => self.regs.b = value,
            RegisterSlot::C => self.regs.c = value,
            RegisterSlot::D => self.regs.d = value,
            RegisterSlot::E => self.regs.e = value,
            RegisterSlot::H => self.regs.h = value,
            RegisterSlot::L => self.regs.l = value,
            RegisterSlot::MemoryAtHl => self.bus_write8(self.regs.hl(), value)?,
            RegisterSlot::A => self.regs.a = value,
        }
        Ok(())
    }

    #[inline]
    pub(super) fn read_pair(&self, pair: PairSlot) -> u16 {
        match pair {
            PairSlot::Bc => self.regs.bc(),
            PairSlot::De => self.regs.de(),
            PairSlot::Hl => self.regs.hl(),
            PairSlot::Sp => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_pair(&mut self, pair: PairSlot, value: u16) {
        match pair {
            PairSlot::Bc => self.regs.set_bc(value),
            PairSlot::De => self.regs.set_de(value),
            PairSlot::Hl => self.regs.set_hl(value),
            PairSlot::Sp => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::Bc => self.regs.bc(),
            StackPair::De => self.regs.de(),
            StackPair::Hl => self.regs.hl(),
            StackPair::Af => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::Bc => self.regs.set_bc(value),
            StackPair::De => self.regs.set_de(value),
            StackPair::Hl => self.regs.set_hl(value),
            StackPair::Af => self.regs.set_af(value),
        }
    }
}
