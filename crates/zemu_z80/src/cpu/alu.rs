//! Arithmetic and logic, with the full six-flag bookkeeping.
//!
//! Every operation spells out each flag it touches with an explicit
//! `set_flag` call; flags not mentioned are left alone (INC and DEC
//! preserve C, ADD HL preserves S, Z and PV).

use crate::bus::Bus;
use crate::cpu::{Cpu, Flag};

/// True when `value` has an even number of set bits.
pub(super) fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

impl<B: Bus> Cpu<B> {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). PV is
    /// two's complement overflow.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry && self.get_flag(Flag::C) {
            1u8
        } else {
            0
        };

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half > 0x0F);
        self.set_flag(Flag::PV, (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::C, full > 0xFF);

        self.regs.a = result;
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true). PV is
    /// two's complement overflow, C is the borrow.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was
    /// performed. A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = if use_carry && self.get_flag(Flag::C) {
            1u8
        } else {
            0
        };

        let result = a.wrapping_sub(value).wrapping_sub(carry_in);

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (a & 0x0F) < (value & 0x0F) + carry_in);
        self.set_flag(Flag::PV, (a ^ value) & 0x80 != 0 && (a ^ result) & 0x80 != 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::C, (a as u16) < (value as u16) + (carry_in as u16));

        result
    }

    /// A = A & value. H is forced set, PV becomes parity of the result.
    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::PV, parity(result));
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::C, false);

        self.regs.a = result;
    }

    /// A = A | value. PV becomes parity of the result.
    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::PV, parity(result));
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::C, false);

        self.regs.a = result;
    }

    /// A = A ^ value. PV becomes parity of the result.
    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::PV, parity(result));
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::C, false);

        self.regs.a = result;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates S, Z, H, PV and N while leaving C unchanged. PV marks
    /// the 0x7F signed-overflow edge.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (value & 0x0F) + 1 > 0x0F);
        self.set_flag(Flag::PV, value == 0x7F);
        self.set_flag(Flag::N, false);

        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates S, Z, H, PV and N while leaving C unchanged. PV marks
    /// the 0x80 signed-overflow edge.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);

        self.set_flag(Flag::S, result & 0x80 != 0);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        self.set_flag(Flag::PV, value == 0x80);
        self.set_flag(Flag::N, true);

        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// S, Z and PV are unaffected; N is cleared; H is the carry out of
    /// bit 11 and C the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }
}
