//! CPU-Type Metadata.
//!
//! This module defines `CpuData`, the shared structure handed to every extension
//! registration routine. It holds:
//! 1. **CSR State:** The full CSR file, including the `mcpuid` capability register.
//! 2. **Capability Access:** Typed helpers for advertising and querying extensions.

/// Capability register access on top of the CSR file.
pub mod csr;

use crate::core::arch::csr::Csrs;

/// CPU-type metadata populated during registration.
///
/// Written only while the registry is being built; read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuData {
    /// Control and Status Registers.
    pub csrs: Csrs,
}

impl CpuData {
    /// Creates metadata with every CSR zeroed.
    pub fn new() -> Self {
        Self::default()
    }
}
