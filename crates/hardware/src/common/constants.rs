//! Common constants used throughout the registry.

/// Width of a standard (uncompressed) RISC-V instruction in bits.
pub const INSTRUCTION_WIDTH: usize = 32;

/// Number of addressable CSRs (12-bit CSR address space).
pub const CSR_COUNT: usize = 4096;

/// Character marking a "don't care" position in a textual bit pattern.
pub const PATTERN_WILDCARD: char = '?';
