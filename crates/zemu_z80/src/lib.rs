//! Instruction-level Z80-class CPU core.
//!
//! The crate models the execution core only: a register file, the flag
//! ALU, and an opcode dispatcher that runs exactly one fetch-decode-execute
//! cycle per [`Cpu::step`] call against a pluggable [`Bus`]. Interrupts,
//! cycle timing, and the prefixed opcode maps are out of scope. The
//! instruction table is deliberately partial and growable: bytes outside it
//! execute as counted no-ops rather than errors.

pub mod bus;
pub mod cpu;

pub use bus::{Bus, FlatBus, MEMORY_SIZE};
pub use cpu::{Cpu, CpuError, Flag, Instr, PairSlot, RegisterSlot, Registers, StackPair};
