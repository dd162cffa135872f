//! # ISA Unit Tests
//!
//! Covers pattern parsing, the descriptor table, the registration protocol,
//! and the A-extension routines.

/// Extension letters and `register_extension`.
pub mod extension;

/// Bit pattern parsing, rendering and matching.
pub mod pattern;


/// Descriptor table registration and decode.
pub mod table;
