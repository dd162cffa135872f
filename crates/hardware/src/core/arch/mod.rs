//! Architectural state carried by the CPU-type metadata.

/// Control and Status Register definitions and storage.
pub mod csr;
