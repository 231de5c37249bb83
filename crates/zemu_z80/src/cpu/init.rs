//! Construction, bus attachment and reset.

use crate::bus::Bus;

use super::{Cpu, Registers};

impl<B: Bus> Default for Cpu<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Cpu<B> {
    /// Creates a core with all registers cleared and no bus attached.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            halted: false,
            bus: None,
            unimplemented_count: 0,
        }
    }

    /// Attaches `bus` to the core. Replaces any bus attached earlier.
    pub fn connect(&mut self, bus: B) {
        self.bus = Some(bus);
    }

    pub fn is_connected(&self) -> bool {
        self.bus.is_some()
    }

    pub fn bus(&self) -> Option<&B> {
        self.bus.as_ref()
    }

    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.bus.as_mut()
    }

    /// Reset the core to its power-on state: PC at 0x0000, SP at the
    /// top of memory, halt latch and unimplemented counter cleared.
    /// The general registers and the bus are left as they are.
    pub fn reset(&mut self) {
        self.regs.pc = 0x0000;
        self.regs.sp = 0xFFFF;
        self.halted = false;
        self.unimplemented_count = 0;
    }

    /// Moves PC to `pc` so execution continues from code loaded at a
    /// non-zero origin. SP and the halt latch keep their prior state;
    /// call [`reset`](Self::reset) first for a full power-on.
    pub fn reset_to(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// How many unimplemented opcodes have been skipped since the last
    /// reset.
    pub fn unimplemented_count(&self) -> u64 {
        self.unimplemented_count
    }
}
