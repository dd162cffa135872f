//! Instruction Set Architecture (ISA) registry.
//!
//! Contains the descriptor table, bit-pattern matching, and the per-extension
//! registration routines that populate them.
//!
//! # Extensions
//!
//! * `rv64a`: Standard Extension for Atomic Instructions.

/// Extension letters, capability bits and the registration protocol.
pub mod extension;

/// Instruction field extraction utilities.
pub mod instruction;

/// Fixed-width bit patterns with wildcard positions.
pub mod pattern;

/// Atomic memory operations extension (AMO, LR, SC).
pub mod rv64a;

/// Instruction descriptors and the table that owns them.
pub mod table;

pub use extension::{Extension, ExtensionRegistrationFn, register_extension};
pub use pattern::BitPattern;
pub use table::{InstrHandler, InstrTable, InstructionDescriptor, add_instr};
