//! RISC-V Atomic Extension (A).
//!
//! Registration routines for the atomic memory operations (AMO) and the
//! load-reserved/store-conditional pair. Two routines are provided:
//!
//! * [`add_isa_extension_a`] advertises the extension in `mcpuid` and
//!   registers no decoders. Decoding support for atomics is opt-in.
//! * [`add_isa_extension_a_decoders`] registers the full `.W`/`.D` table
//!   (without handlers) and then advertises the extension.

/// Function code 3 definitions (operand width).
pub mod funct3;

/// Function code 5 definitions (operation).
pub mod funct5;

/// Atomic extension opcodes.
pub mod opcodes;

use crate::common::RegistrationError;
use crate::core::CpuData;
use crate::isa::extension::Extension;
use crate::isa::table::{InstrTable, add_instr};

use self::funct3::AmoWidth;
use self::funct5::AmoOp;

/// One A-extension encoding in textual pattern form.
#[derive(Clone, Copy, Debug)]
pub struct AtomicEncoding {
    /// Operation selected by `funct5`.
    pub op: AmoOp,
    /// Operand width selected by `funct3`.
    pub width: AmoWidth,
    /// 32-character pattern, most significant bit first.
    pub pattern: &'static str,
}

impl AtomicEncoding {
    /// Registered mnemonic, e.g. `AMOADD_W`.
    pub fn mnemonic(&self) -> String {
        format!("{}_{}", self.op.stem(), self.width.suffix())
    }
}

const fn enc(op: AmoOp, width: AmoWidth, pattern: &'static str) -> AtomicEncoding {
    AtomicEncoding { op, width, pattern }
}

/// The A-extension encodings. `aq`/`rl` and register fields are wildcards;
/// LR additionally fixes `rs2` to zero.
pub const ATOMIC_ENCODINGS: [AtomicEncoding; 22] = [
    enc(AmoOp::Add, AmoWidth::Word, "00000????????????010?????0101111"),
    enc(AmoOp::Xor, AmoWidth::Word, "00100????????????010?????0101111"),
    enc(AmoOp::Or, AmoWidth::Word, "01000????????????010?????0101111"),
    enc(AmoOp::And, AmoWidth::Word, "01100????????????010?????0101111"),
    enc(AmoOp::Min, AmoWidth::Word, "10000????????????010?????0101111"),
    enc(AmoOp::Max, AmoWidth::Word, "10100????????????010?????0101111"),
    enc(AmoOp::MinU, AmoWidth::Word, "11000????????????010?????0101111"),
    enc(AmoOp::MaxU, AmoWidth::Word, "11100????????????010?????0101111"),
    enc(AmoOp::Swap, AmoWidth::Word, "00001????????????010?????0101111"),
    enc(AmoOp::Lr, AmoWidth::Word, "00010??00000?????010?????0101111"),
    enc(AmoOp::Sc, AmoWidth::Word, "00011????????????010?????0101111"),
    enc(AmoOp::Add, AmoWidth::Double, "00000????????????011?????0101111"),
    enc(AmoOp::Xor, AmoWidth::Double, "00100????????????011?????0101111"),
    enc(AmoOp::Or, AmoWidth::Double, "01000????????????011?????0101111"),
    enc(AmoOp::And, AmoWidth::Double, "01100????????????011?????0101111"),
    enc(AmoOp::Min, AmoWidth::Double, "10000????????????011?????0101111"),
    enc(AmoOp::Max, AmoWidth::Double, "10100????????????011?????0101111"),
    enc(AmoOp::MinU, AmoWidth::Double, "11000????????????011?????0101111"),
    enc(AmoOp::MaxU, AmoWidth::Double, "11100????????????011?????0101111"),
    enc(AmoOp::Swap, AmoWidth::Double, "00001????????????011?????0101111"),
    enc(AmoOp::Lr, AmoWidth::Double, "00010??00000?????011?????0101111"),
    enc(AmoOp::Sc, AmoWidth::Double, "00011????????????011?????0101111"),
];

/// Advertises the A extension.
///
/// Sets bit 0 of `mcpuid` and appends nothing to `out`. Calling it again
/// changes nothing.
pub fn add_isa_extension_a(data: &mut CpuData, _out: &mut InstrTable) {
    data.set_capability(Extension::A);
}

/// Registers every A-extension decoder, then advertises the extension.
///
/// # Errors
///
/// Returns [`RegistrationError::DuplicateMnemonic`] if any atomic mnemonic is
/// already in `out`. Nothing is appended and `mcpuid` is untouched in that case.
pub fn add_isa_extension_a_decoders(
    data: &mut CpuData,
    out: &mut InstrTable,
) -> Result<(), RegistrationError> {
    let mnemonics: Vec<String> = ATOMIC_ENCODINGS.iter().map(AtomicEncoding::mnemonic).collect();
    if let Some(dup) = mnemonics.iter().find(|m| out.contains(m)) {
        return Err(RegistrationError::DuplicateMnemonic(dup.clone()));
    }

    for (mnemonic, encoding) in mnemonics.iter().zip(ATOMIC_ENCODINGS.iter()) {
        add_instr(mnemonic, encoding.pattern, None, out)?;
    }
    data.set_capability(Extension::A);
    Ok(())
}
