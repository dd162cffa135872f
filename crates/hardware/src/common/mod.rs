//! Common utilities and types shared across the registry.
//!
//! This module provides the fundamental building blocks used by every other component:
//! 1. **Constants:** Instruction width, CSR address space, pattern syntax.
//! 2. **Error Handling:** Registration and configuration error types.

/// Common constants used throughout the registry.
pub mod constants;

/// Error types for registration and configuration.
pub mod error;

pub use constants::{CSR_COUNT, INSTRUCTION_WIDTH};
pub use error::{ConfigError, RegistrationError};
