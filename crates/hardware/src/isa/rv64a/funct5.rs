//! RISC-V Atomic Extension (A) Function Codes (funct5).
//!
//! The `funct5` field (bits 31-27) selects the atomic operation.

/// Atomic operation selected by `funct5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmoOp {
    /// Atomic Add.
    Add,
    /// Atomic XOR.
    Xor,
    /// Atomic OR.
    Or,
    /// Atomic AND.
    And,
    /// Atomic Minimum (Signed).
    Min,
    /// Atomic Maximum (Signed).
    Max,
    /// Atomic Minimum (Unsigned).
    MinU,
    /// Atomic Maximum (Unsigned).
    MaxU,
    /// Atomic Swap.
    Swap,
    /// Load-Reserved.
    Lr,
    /// Store-Conditional.
    Sc,
}

impl AmoOp {
    /// All operations, in registration order.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Xor,
        Self::Or,
        Self::And,
        Self::Min,
        Self::Max,
        Self::MinU,
        Self::MaxU,
        Self::Swap,
        Self::Lr,
        Self::Sc,
    ];

    /// The 5-bit function code.
    pub const fn funct5(self) -> u32 {
        match self {
            Self::Add => 0b00000,
            Self::Xor => 0b00100,
            Self::Or => 0b01000,
            Self::And => 0b01100,
            Self::Min => 0b10000,
            Self::Max => 0b10100,
            Self::MinU => 0b11000,
            Self::MaxU => 0b11100,
            Self::Swap => 0b00001,
            Self::Lr => 0b00010,
            Self::Sc => 0b00011,
        }
    }

    /// Mnemonic stem, without the width suffix.
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Add => "AMOADD",
            Self::Xor => "AMOXOR",
            Self::Or => "AMOOR",
            Self::And => "AMOAND",
            Self::Min => "AMOMIN",
            Self::Max => "AMOMAX",
            Self::MinU => "AMOMINU",
            Self::MaxU => "AMOMAXU",
            Self::Swap => "AMOSWAP",
            Self::Lr => "LR",
            Self::Sc => "SC",
        }
    }

    /// Looks an operation up by function code.
    pub fn from_funct5(funct5: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.funct5() == funct5)
    }
}
