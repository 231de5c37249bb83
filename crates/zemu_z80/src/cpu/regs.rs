//! Register file and flag layout.

/// The Z80 register file: eight 8-bit registers plus the 16-bit stack
/// pointer and program counter.
///
/// The 16-bit pairs AF, BC, DE and HL are views over the 8-bit halves;
/// the pair accessors below combine and split them on the fly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// Flag bit positions within F.
///
/// Bits 5 and 3 carry no flag; the core never masks them, so whatever a
/// program writes there (through POP AF) is preserved.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    /// Sign, bit 7 of the result.
    S = 7,
    /// Zero.
    Z = 6,
    /// Half carry, out of bit 3 (bit 11 for 16-bit adds).
    H = 4,
    /// Parity or two's complement overflow, depending on the operation.
    PV = 2,
    /// Set when the last operation was a subtraction.
    N = 1,
    /// Carry, out of bit 7 (bit 15 for 16-bit adds).
    C = 0,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = f;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}
