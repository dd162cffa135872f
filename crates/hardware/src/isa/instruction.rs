//! Instruction field extraction utilities.
//!
//! Provides bit extraction for the fields the registry and its tools inspect
//! when bucketing and reporting 32-bit instruction encodings.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct5 field (bits 27-31).
pub const FUNCT5_MASK: u32 = 0x1F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// For atomics this is the operation width.
    fn funct3(&self) -> u32;

    /// Extracts the funct5 field (bits 27-31).
    ///
    /// Selects the operation for AMO, LR and SC instructions.
    fn funct5(&self) -> u32;

    /// Extracts the acquire ordering bit (bit 26).
    fn aq(&self) -> bool;

    /// Extracts the release ordering bit (bit 25).
    fn rl(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> 27) & FUNCT5_MASK
    }

    #[inline(always)]
    fn aq(&self) -> bool {
        (self >> 26) & 1 != 0
    }

    #[inline(always)]
    fn rl(&self) -> bool {
        (self >> 25) & 1 != 0
    }
}
