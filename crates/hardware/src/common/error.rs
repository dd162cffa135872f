//! Registration and configuration error definitions.
//!
//! This module defines the error types surfaced while building an instruction registry:
//! 1. **Malformed Registration:** Bad bit patterns, empty or duplicate mnemonics.
//! 2. **Unsupported Extensions:** Extensions with no registration routine.
//! 3. **Configuration:** I/O and JSON failures while loading a `Config`.

use std::io;

use thiserror::Error;

/// A malformed instruction or extension registration.
///
/// Every variant is reported synchronously to the caller of the registration
/// routine; the descriptor table is left unchanged when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The bit pattern does not have exactly 32 positions.
    #[error("{mnemonic}: bit pattern has {width} positions, expected {expected}")]
    InvalidWidth {
        /// Mnemonic the pattern was registered under.
        mnemonic: String,
        /// Number of characters found.
        width: usize,
        /// Required number of characters.
        expected: usize,
    },

    /// The bit pattern contains a character other than `0`, `1` or `?`.
    #[error("{mnemonic}: invalid character {ch:?} at pattern position {position}")]
    InvalidCharacter {
        /// Mnemonic the pattern was registered under.
        mnemonic: String,
        /// The offending character.
        ch: char,
        /// Character index in the pattern string (0 is the most significant bit).
        position: usize,
    },

    /// The mnemonic is empty or whitespace only.
    #[error("instruction mnemonic is empty")]
    EmptyMnemonic,

    /// A descriptor with the same mnemonic is already registered.
    #[error("instruction {0} is already registered")]
    DuplicateMnemonic(String),

    /// No registration routine exists for the requested extension letter.
    #[error("unsupported ISA extension '{0}'")]
    UnsupportedExtension(char),
}

impl RegistrationError {
    /// Returns the mnemonic the error refers to, if any.
    pub fn mnemonic(&self) -> Option<&str> {
        match self {
            Self::InvalidWidth { mnemonic, .. }
            | Self::InvalidCharacter { mnemonic, .. }
            | Self::DuplicateMnemonic(mnemonic) => Some(mnemonic),
            Self::EmptyMnemonic | Self::UnsupportedExtension(_) => None,
        }
    }
}

/// Failure while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not valid JSON or does not match the schema.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
