//! RISC-V instruction decoder registry.
//!
//! This crate implements the pluggable decoder table of a RISC-V simulator/debugger:
//! 1. **ISA:** Bit patterns, descriptors, the descriptor table, and per-extension routines.
//! 2. **Core:** CPU-type metadata and the `mcpuid` capability register.
//! 3. **Simulation:** Building a frozen registry from configuration.
//! 4. **Configuration:** Serde-backed settings loaded from JSON.

/// Common types and constants (errors, widths).
pub mod common;
/// Registry configuration (defaults, JSON loading).
pub mod config;
/// CPU-type metadata (CSRs, capability register).
pub mod core;
/// Instruction set (patterns, descriptors, table, extensions).
pub mod isa;
/// Registry construction.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU-type metadata handed to extension routines.
pub use crate::core::CpuData;
/// Frozen metadata plus instruction table; construct with `Registry::from_config`.
pub use crate::sim::Registry;
