//! Opcode decoding into typed instructions.
//!
//! Operand fields inside an opcode are three-bit (8-bit operand slots)
//! or two-bit (register pairs) selectors; the `from_code` constructors
//! mask the byte down before matching, so every input maps to a variant.

/// An 8-bit operand slot: one of the seven registers, or the byte in
/// memory at the address in HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterSlot {
    B,
    C,
    D,
    E,
    H,
    L,
    /// The memory byte addressed by HL, selector 6 in the encoding.
    MemoryAtHl,
    A,
}

impl RegisterSlot {
    /// Maps a three-bit operand field to its slot. Bits above the field
    /// are ignored.
    pub fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => RegisterSlot::B,
            1 => RegisterSlot::C,
            2 => RegisterSlot::D,
            3 => RegisterSlot::E,
            4 => RegisterSlot::H,
            5 => RegisterSlot::L,
            6 => RegisterSlot::MemoryAtHl,
            7 => RegisterSlot::A,
            _ => unreachable!(),
        }
    }
}

/// A 16-bit pair operand for loads, 16-bit arithmetic and pointer math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairSlot {
    Bc,
    De,
    Hl,
    Sp,
}

impl PairSlot {
    /// Maps a two-bit pair field to its pair. Bits above the field are
    /// ignored.
    pub fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => PairSlot::Bc,
            1 => PairSlot::De,
            2 => PairSlot::Hl,
            3 => PairSlot::Sp,
            _ => unreachable!(),
        }
    }
}

/// A 16-bit pair operand for PUSH and POP, where selector 3 means AF
/// rather than SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    Bc,
    De,
    Hl,
    Af,
}

impl StackPair {
    /// Maps a two-bit pair field to its pair. Bits above the field are
    /// ignored.
    pub fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => StackPair::Bc,
            1 => StackPair::De,
            2 => StackPair::Hl,
            3 => StackPair::Af,
            _ => unreachable!(),
        }
    }
}

/// One decoded instruction. Immediate operands are not part of the
/// variant; execution fetches them from the byte stream after PC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instr {
    /// LD dst, src over the 8-bit operand slots.
    LdSlotSlot { dst: RegisterSlot, src: RegisterSlot },
    /// LD rr, nn with a little-endian immediate word.
    LdPairImm16(PairSlot),
    /// LD r, n with an immediate byte. The encoding has no memory form
    /// here, so the slot is never [`RegisterSlot::MemoryAtHl`].
    LdSlotImm8(RegisterSlot),
    /// INC rr, no flags.
    IncPair(PairSlot),
    /// DEC rr, no flags.
    DecPair(PairSlot),
    /// INC on an 8-bit slot, C preserved.
    IncSlot(RegisterSlot),
    /// DEC on an 8-bit slot, C preserved.
    DecSlot(RegisterSlot),
    /// ADD A, slot or ADC A, slot.
    AddASlot { src: RegisterSlot, with_carry: bool },
    /// SUB A, slot or SBC A, slot.
    SubASlot { src: RegisterSlot, with_carry: bool },
    /// ADD A, n or ADC A, n.
    AddAImm8 { with_carry: bool },
    /// SUB A, n or SBC A, n.
    SubAImm8 { with_carry: bool },
    /// ADD HL, rr.
    AddHlPair(PairSlot),
    /// AND n.
    AndImm8,
    /// XOR n.
    XorImm8,
    /// OR n.
    OrImm8,
    /// CP n.
    CpImm8,
    /// PUSH rr.
    Push(StackPair),
    /// POP rr.
    Pop(StackPair),
    /// SCF, set carry.
    Scf,
    /// HALT.
    Halt,
    /// An opcode the core does not know yet. Carries the raw byte.
    Unimplemented(u8),
}

impl Instr {
    /// Decodes one opcode byte. Total over all 256 values; anything the
    /// core does not model comes back as [`Instr::Unimplemented`].
    pub fn decode(opcode: u8) -> Instr {
        // The 0x40..=0x7F quadrant is the LD block: destination in bits
        // 5..3, source in bits 2..0. The slot 6 to slot 6 hole (which
        // would be LD (HL), (HL)) encodes HALT.
        if (0x40..=0x7F).contains(&opcode) {
            if opcode == 0x76 {
                return Instr::Halt;
            }
            return Instr::LdSlotSlot {
                dst: RegisterSlot::from_code(opcode >> 3),
                src: RegisterSlot::from_code(opcode),
            };
        }

        match opcode {
            0x01 | 0x11 | 0x21 | 0x31 => Instr::LdPairImm16(PairSlot::from_code(opcode >> 4)),
            0x03 | 0x13 | 0x23 | 0x33 => Instr::IncPair(PairSlot::from_code(opcode >> 4)),
            0x0B | 0x1B | 0x2B | 0x3B => Instr::DecPair(PairSlot::from_code(opcode >> 4)),
            0x09 | 0x19 | 0x29 | 0x39 => Instr::AddHlPair(PairSlot::from_code(opcode >> 4)),
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                Instr::IncSlot(RegisterSlot::from_code(opcode >> 3))
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                Instr::DecSlot(RegisterSlot::from_code(opcode >> 3))
            }
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => {
                Instr::LdSlotImm8(RegisterSlot::from_code(opcode >> 3))
            }
            0x37 => Instr::Scf,
            0x80..=0x87 => Instr::AddASlot {
                src: RegisterSlot::from_code(opcode),
                with_carry: false,
            },
            0x88..=0x8F => Instr::AddASlot {
                src: RegisterSlot::from_code(opcode),
                with_carry: true,
            },
            0x90..=0x97 => Instr::SubASlot {
                src: RegisterSlot::from_code(opcode),
                with_carry: false,
            },
            0x98..=0x9F => Instr::SubASlot {
                src: RegisterSlot::from_code(opcode),
                with_carry: true,
            },
            0xC6 => Instr::AddAImm8 { with_carry: false },
            0xCE => Instr::AddAImm8 { with_carry: true },
            0xD6 => Instr::SubAImm8 { with_carry: false },
            0xDE => Instr::SubAImm8 { with_carry: true },
            0xE6 => Instr::AndImm8,
            0xEE => Instr::XorImm8,
            0xF6 => Instr::OrImm8,
            0xFE => Instr::CpImm8,
            0xC5 | 0xD5 | 0xE5 | 0xF5 => Instr::Push(StackPair::from_code(opcode >> 4)),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => Instr::Pop(StackPair::from_code(opcode >> 4)),
            other => Instr::Unimplemented(other),
        }
    }
}
