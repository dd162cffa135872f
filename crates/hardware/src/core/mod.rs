//! CPU-type state shared with extension registration routines.
//!
//! This module contains the architectural storage (CSRs) and the `CpuData`
//! metadata container that registration routines mutate.

/// Architecture-specific components (CSRs).
pub mod arch;

/// CPU-type metadata and capability register access.
pub mod cpu;

pub use self::cpu::CpuData;
