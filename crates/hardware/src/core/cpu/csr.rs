//! Capability Register Access.
//!
//! Extensions advertise themselves by setting bit `letter - 'A'` of `mcpuid`.
//! These helpers keep that encoding in one place.

use super::CpuData;
use crate::core::arch::csr;
use crate::isa::extension::Extension;

impl CpuData {
    /// Reads a value from a Control and Status Register (CSR).
    #[inline]
    pub fn csr_read(&self, addr: u32) -> u64 {
        self.csrs.read(addr)
    }

    /// Writes a value to a Control and Status Register (CSR).
    #[inline]
    pub fn csr_write(&mut self, addr: u32, val: u64) {
        self.csrs.write(addr, val);
    }

    /// Returns the raw `mcpuid` value.
    pub fn capabilities(&self) -> u64 {
        self.csrs.read(csr::MCPUID)
    }

    /// Returns only the extension bits of `mcpuid`.
    pub fn extension_bits(&self) -> u64 {
        self.capabilities() & csr::MCPUID_EXTENSIONS_MASK
    }

    /// Advertises `ext` by setting its bit in `mcpuid`.
    ///
    /// Setting an already-set bit has no effect.
    pub fn set_capability(&mut self, ext: Extension) {
        self.csrs.set_bits(csr::MCPUID, ext.capability_bit());
    }

    /// Withdraws `ext` by clearing its bit in `mcpuid`.
    pub fn clear_capability(&mut self, ext: Extension) {
        self.csrs.clear_bits(csr::MCPUID, ext.capability_bit());
    }

    /// Returns `true` if `ext` is advertised in `mcpuid`.
    pub fn has_capability(&self, ext: Extension) -> bool {
        self.capabilities() & ext.capability_bit() != 0
    }

    /// Returns every advertised extension in bit order.
    pub fn advertised(&self) -> Vec<Extension> {
        Extension::ALL
            .iter()
            .copied()
            .filter(|ext| self.has_capability(*ext))
            .collect()
    }
}
