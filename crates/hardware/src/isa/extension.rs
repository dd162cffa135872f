//! ISA extensions and the registration protocol.
//!
//! Each optional extension contributes descriptors to an [`InstrTable`] and
//! advertises itself through its bit in the `mcpuid` capability register.
//! The two effects are independent: a routine may set its bit without
//! registering a single decoder, and callers have to tolerate that.

use std::fmt;

use crate::common::RegistrationError;
use crate::core::CpuData;
use crate::isa::table::InstrTable;

/// Signature shared by every extension registration routine.
pub type ExtensionRegistrationFn = fn(&mut CpuData, &mut InstrTable) -> Result<(), RegistrationError>;

/// Single-letter standard RISC-V extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extension {
    /// Atomic instructions.
    A,
    /// Compressed instructions.
    C,
    /// Double-precision floating point.
    D,
    /// Single-precision floating point.
    F,
    /// Base integer instruction set.
    I,
    /// Integer multiply and divide.
    M,
    /// Supervisor mode.
    S,
    /// User mode.
    U,
}

impl Extension {
    /// Every known extension, in capability bit order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::C,
        Self::D,
        Self::F,
        Self::I,
        Self::M,
        Self::S,
        Self::U,
    ];

    /// The extension letter.
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
            Self::I => 'I',
            Self::M => 'M',
            Self::S => 'S',
            Self::U => 'U',
        }
    }

    /// Bit index in `mcpuid` (`letter - 'A'`).
    pub const fn bit_index(self) -> u32 {
        self.letter() as u32 - 'A' as u32
    }

    /// The single bit this extension owns in `mcpuid`.
    pub const fn capability_bit(self) -> u64 {
        1 << self.bit_index()
    }

    /// Looks an extension up by letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|ext| ext.letter() == upper)
    }
}

impl TryFrom<char> for Extension {
    type Error = RegistrationError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(RegistrationError::UnsupportedExtension(letter))
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Runs one extension registration routine.
///
/// Errors from the routine are returned unchanged. Whatever the routine
/// appended or set before failing stays in place.
///
/// # Errors
///
/// Propagates the routine's [`RegistrationError`].
pub fn register_extension(
    extension_fn: ExtensionRegistrationFn,
    data: &mut CpuData,
    out: &mut InstrTable,
) -> Result<(), RegistrationError> {
    let before_len = out.len();
    let before_bits = data.extension_bits();

    extension_fn(data, out)?;

    let added = out.len() - before_len;
    let newly_set = data.extension_bits() & !before_bits;
    tracing::info!(
        added,
        mcpuid = %format!("{:#x}", data.capabilities()),
        "extension registered"
    );
    if added == 0 && newly_set != 0 {
        tracing::warn!(
            bits = %format!("{newly_set:#x}"),
            "capability advertised without any decoders"
        );
    }
    Ok(())
}
