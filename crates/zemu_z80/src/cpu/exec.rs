//! Instruction dispatch.

mod alu;
mod incdec;
mod ld;
mod stack;

use crate::bus::Bus;
use crate::cpu::decode::Instr;
use crate::cpu::{Cpu, CpuError};

impl<B: Bus> Cpu<B> {
    /// Runs one full fetch, decode, execute round.
    ///
    /// Executing HALT sets the halt latch, but a later call still runs;
    /// honoring the latch is up to the host loop. Unknown opcodes are
    /// skipped as one-byte no-ops and counted.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let opcode = self.fetch8()?;
        let instr = Instr::decode(opcode);
        self.exec_instr(instr)
    }

    fn exec_instr(&mut self, instr: Instr) -> Result<(), CpuError> {
        match instr {
            Instr::LdSlotSlot { dst, src } => self.exec_ld_slot_slot(dst, src),
            Instr::LdPairImm16(pair) => self.exec_ld_pair_imm16(pair),
            Instr::LdSlotImm8(slot) => self.exec_ld_slot_imm8(slot),
            Instr::IncPair(pair) => self.exec_inc16_pair(pair),
            Instr::DecPair(pair) => self.exec_dec16_pair(pair),
            Instr::IncSlot(slot) => self.exec_inc8_slot(slot),
            Instr::DecSlot(slot) => self.exec_dec8_slot(slot),
            Instr::AddASlot { src, with_carry } => self.exec_add_a(src, with_carry),
            Instr::SubASlot { src, with_carry } => self.exec_sub_a(src, with_carry),
            Instr::AddAImm8 { with_carry } => self.exec_add_a_imm(with_carry),
            Instr::SubAImm8 { with_carry } => self.exec_sub_a_imm(with_carry),
            Instr::AddHlPair(pair) => self.exec_add_hl_pair(pair),
            Instr::AndImm8 => self.exec_and_imm(),
            Instr::XorImm8 => self.exec_xor_imm(),
            Instr::OrImm8 => self.exec_or_imm(),
            Instr::CpImm8 => self.exec_cp_imm(),
            Instr::Push(pair) => self.exec_push_pair(pair),
            Instr::Pop(pair) => self.exec_pop_pair(pair),
            Instr::Scf => self.exec_scf(),
            Instr::Halt => self.exec_halt(),
            Instr::Unimplemented(opcode) => self.exec_unimplemented(opcode),
        }
    }

    fn exec_halt(&mut self) -> Result<(), CpuError> {
        self.halted = true;
        Ok(())
    }

    fn exec_unimplemented(&mut self, opcode: u8) -> Result<(), CpuError> {
        self.unimplemented_count += 1;
        let opcode_addr = self.regs.pc.wrapping_sub(1);
        log::trace!(
            "skipping unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            opcode = opcode,
            pc = opcode_addr,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        Ok(())
    }
}
