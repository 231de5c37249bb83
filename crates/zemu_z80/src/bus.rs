//! Memory bus contract and a flat reference implementation.

/// Total addressable memory for the core (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Abstraction over the memory bus.
///
/// Reads and writes are total over the 16-bit address space and never
/// fail; what lives behind an address is entirely up to the implementor.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

/// Flat 64 KiB RAM bus, zero-initialised at creation.
///
/// Every address is plain storage. Suitable for tests and simple hosts;
/// real machines layer ROM and IO mappings behind their own [`Bus`]
/// implementation instead.
pub struct FlatBus {
    memory: [u8; MEMORY_SIZE],
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: [0; MEMORY_SIZE],
        }
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
