//! Z80-class CPU core.
//!
//! The core models the instruction level only: [`Cpu::step`] fetches,
//! decodes and fully executes one opcode per call. Cycle timing, memory
//! refresh, interrupts and the prefixed opcode pages are out of scope.

mod alu;
mod decode;
mod exec;
mod helpers;
mod init;
mod regs;


pub use decode::{Instr, PairSlot, RegisterSlot, StackPair};
pub use regs::{Flag, Registers};

use thiserror::Error;

use crate::bus::Bus;

/// Errors surfaced by bus-touching CPU operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The CPU has no bus attached, so nothing can be fetched or stored.
    #[error("cpu is not connected to a bus")]
    NotConnected,
}

/// The CPU core. Owns its register file and, once connected, the bus it
/// executes against.
pub struct Cpu<B: Bus> {
    pub regs: Registers,
    halted: bool,
    bus: Option<B>,
    unimplemented_count: u64,
}

impl<B: Bus> Cpu<B> {
    /// Returns whether `flag` is set in F.
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    /// Sets or clears `flag` in F, leaving every other bit alone.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }
}
