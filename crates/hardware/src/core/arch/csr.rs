//! Control and Status Register (CSR) definitions and storage.
//!
//! This module implements the CSR file carried by the CPU-type metadata. It provides:
//! 1. **Address Definitions:** Constants for the machine identification CSRs.
//! 2. **Field Masks:** Bitmasks and shifts for the `mcpuid` base and extension fields.
//! 3. **Register Storage:** The `Csrs` struct covering the full 12-bit address space.
//! 4. **Access Logic:** Standardized read and write operations for register interaction.

use crate::common::CSR_COUNT;

/// Machine CPU description CSR address (privileged spec 1.7).
///
/// Bits 25:0 advertise the supported single-letter extensions, bit `letter - 'A'`.
pub const MCPUID: u32 = 0xF00;

/// Machine implementation ID CSR address (privileged spec 1.7).
pub const MIMPID: u32 = 0xF01;

/// Machine hardware thread ID CSR address (privileged spec 1.7).
pub const MHARTID: u32 = 0xF10;

/// Mask for the 12-bit CSR address field.
pub const CSR_ADDR_MASK: u32 = 0xFFF;

/// Mask of the extension bits in `mcpuid` (one per letter `A`..=`Z`).
pub const MCPUID_EXTENSIONS_MASK: u64 = (1 << 26) - 1;

/// Shift of the base ISA field in `mcpuid`.
pub const MCPUID_BASE_SHIFT: u64 = 62;

/// `mcpuid` base field value for RV32I.
pub const MCPUID_BASE_RV32I: u64 = 0;

/// `mcpuid` base field value for RV64I.
pub const MCPUID_BASE_RV64I: u64 = 2 << MCPUID_BASE_SHIFT;

/// Control and Status Register file.
///
/// Unlike a running core this file is plain storage: every address in the
/// 12-bit space is backed and writes are never masked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Csrs {
    regs: Box<[u64]>,
}

impl Default for Csrs {
    fn default() -> Self {
        Self {
            regs: vec![0; CSR_COUNT].into_boxed_slice(),
        }
    }
}

impl Csrs {
    /// Reads a CSR value by its address.
    ///
    /// Only the low 12 bits of `addr` are significant.
    #[inline]
    pub fn read(&self, addr: u32) -> u64 {
        self.regs[(addr & CSR_ADDR_MASK) as usize]
    }

    /// Writes a value to a CSR by its address.
    #[inline]
    pub fn write(&mut self, addr: u32, val: u64) {
        self.regs[(addr & CSR_ADDR_MASK) as usize] = val;
    }

    /// ORs `bits` into a CSR.
    #[inline]
    pub fn set_bits(&mut self, addr: u32, bits: u64) {
        self.regs[(addr & CSR_ADDR_MASK) as usize] |= bits;
    }

    /// Clears `bits` in a CSR.
    #[inline]
    pub fn clear_bits(&mut self, addr: u32, bits: u64) {
        self.regs[(addr & CSR_ADDR_MASK) as usize] &= !bits;
    }

    /// Iterates over `(address, value)` pairs of all non-zero CSRs.
    pub fn non_zero(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.regs
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(|(addr, v)| (addr as u32, *v))
    }
}
