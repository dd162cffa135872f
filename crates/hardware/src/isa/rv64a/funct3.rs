//! RISC-V Atomic Extension (A) Function Codes (funct3).
//!
//! The `funct3` field of an A-extension instruction encodes the operand width.

/// Operation Width: 32-bit (Word).
pub const WIDTH_32: u32 = 0b010;

/// Operation Width: 64-bit (Double).
pub const WIDTH_64: u32 = 0b011;

/// Operand width of an atomic instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmoWidth {
    /// 32-bit word (`.W`).
    Word,
    /// 64-bit doubleword (`.D`).
    Double,
}

impl AmoWidth {
    /// The 3-bit function code.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Word => WIDTH_32,
            Self::Double => WIDTH_64,
        }
    }

    /// Mnemonic suffix.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Word => "W",
            Self::Double => "D",
        }
    }

    /// Looks a width up by function code.
    pub const fn from_funct3(funct3: u32) -> Option<Self> {
        match funct3 {
            WIDTH_32 => Some(Self::Word),
            WIDTH_64 => Some(Self::Double),
            _ => None,
        }
    }
}
