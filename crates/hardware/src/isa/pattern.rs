//! Fixed-width instruction bit patterns.
//!
//! A pattern is written as 32 characters, most significant bit first, where
//! `0` and `1` are fixed bits and `?` is a wildcard (operand field). It is
//! parsed once into a pair of masks so matching is a single AND and compare:
//!
//! ```text
//! "00000????????????010?????0101111"   (AMOADD.W)
//!  care  = 0xF800_707F
//!  value = 0x0000_202F
//!  match = (word & care) == value
//! ```

use std::fmt;

use crate::common::constants::{INSTRUCTION_WIDTH, PATTERN_WILDCARD};
use crate::common::RegistrationError;
use crate::isa::instruction::OPCODE_MASK;

/// A 32-bit instruction template with wildcard positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitPattern {
    care: u32,
    value: u32,
}

impl BitPattern {
    /// Builds a pattern from a care mask and the expected bit values.
    ///
    /// Bits of `value` outside `care` are discarded.
    pub const fn from_masks(care: u32, value: u32) -> Self {
        Self {
            care,
            value: value & care,
        }
    }

    /// Parses the textual form of a pattern.
    ///
    /// `mnemonic` is only used to label the error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidWidth`] if `text` is not exactly 32
    /// characters, or [`RegistrationError::InvalidCharacter`] for anything other
    /// than `0`, `1` or `?`.
    pub fn parse(mnemonic: &str, text: &str) -> Result<Self, RegistrationError> {
        let width = text.chars().count();
        if width != INSTRUCTION_WIDTH {
            return Err(RegistrationError::InvalidWidth {
                mnemonic: mnemonic.to_owned(),
                width,
                expected: INSTRUCTION_WIDTH,
            });
        }

        let mut care = 0u32;
        let mut value = 0u32;
        for (position, ch) in text.chars().enumerate() {
            let bit = 1u32 << (INSTRUCTION_WIDTH - 1 - position);
            match ch {
                '0' => care |= bit,
                '1' => {
                    care |= bit;
                    value |= bit;
                }
                PATTERN_WILDCARD => {}
                _ => {
                    return Err(RegistrationError::InvalidCharacter {
                        mnemonic: mnemonic.to_owned(),
                        ch,
                        position,
                    });
                }
            }
        }

        Ok(Self { care, value })
    }

    /// Mask of the fixed bit positions.
    #[inline(always)]
    pub const fn care(&self) -> u32 {
        self.care
    }

    /// Expected values of the fixed bit positions.
    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` if `word` agrees with every fixed bit.
    #[inline(always)]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.care == self.value
    }

    /// Number of fixed (non-wildcard) positions.
    pub const fn fixed_bits(&self) -> u32 {
        self.care.count_ones()
    }

    /// The major opcode, if the pattern fixes all seven opcode bits.
    pub const fn opcode(&self) -> Option<u32> {
        if self.care & OPCODE_MASK == OPCODE_MASK {
            Some(self.value & OPCODE_MASK)
        } else {
            None
        }
    }

    /// Returns `true` if some word matches both patterns.
    pub const fn overlaps(&self, other: &Self) -> bool {
        let common = self.care & other.care;
        self.value & common == other.value & common
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in (0..INSTRUCTION_WIDTH).rev() {
            let mask = 1u32 << bit;
            let ch = if self.care & mask == 0 {
                PATTERN_WILDCARD
            } else if self.value & mask == 0 {
                '0'
            } else {
                '1'
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
