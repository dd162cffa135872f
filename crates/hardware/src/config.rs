//! Configuration system for the instruction registry.
//!
//! This module defines the configuration structures used to build a registry. It provides:
//! 1. **Defaults:** Baseline extension set and registration policy.
//! 2. **Structures:** General (logging) and ISA (extensions, decoders) sections.
//! 3. **Loading:** JSON from a string or a file, or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{ConfigError, RegistrationError};
use crate::isa::Extension;

/// Default configuration constants.
mod defaults {
    /// Extensions registered when none are configured.
    pub const EXTENSIONS: &str = "A";

    /// Default `tracing` filter directive for front ends.
    pub const LOG_FILTER: &str = "warn";
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvdbg_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.isa.extensions, "A");
/// assert!(!config.isa.atomic_decoders);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rvdbg_core::config::Config;
///
/// let json = r#"{
///     "general": { "log_filter": "debug" },
///     "isa": {
///         "extensions": "A",
///         "atomic_decoders": true,
///         "gate_capability_on_decoders": true
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.log_filter, "debug");
/// assert!(config.isa.atomic_decoders);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction set settings
    #[serde(default)]
    pub isa: IsaConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(default = "GeneralConfig::default_log_filter")]
    pub log_filter: String,
}

impl GeneralConfig {
    /// Returns the default log filter directive.
    fn default_log_filter() -> String {
        defaults::LOG_FILTER.to_owned()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::LOG_FILTER.to_owned(),
        }
    }
}

/// Instruction set settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IsaConfig {
    /// Extension letters to register, in order (e.g. "A")
    #[serde(default = "IsaConfig::default_extensions")]
    pub extensions: String,

    /// Register the full A-extension decoder table instead of only advertising the extension
    #[serde(default)]
    pub atomic_decoders: bool,

    /// Clear the capability bit of any extension that registered no decoders
    #[serde(default)]
    pub gate_capability_on_decoders: bool,
}

impl IsaConfig {
    /// Returns the default extension string.
    fn default_extensions() -> String {
        defaults::EXTENSIONS.to_owned()
    }

    /// Parses `extensions` into a list, preserving order and dropping repeats.
    ///
    /// Whitespace and underscores are ignored; letters are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::UnsupportedExtension`] for an unknown letter.
    pub fn extension_list(&self) -> Result<Vec<Extension>, RegistrationError> {
        let mut list = Vec::new();
        for letter in self
            .extensions
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
        {
            let ext = Extension::try_from(letter)?;
            if !list.contains(&ext) {
                list.push(ext);
            }
        }
        Ok(list)
    }
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            extensions: defaults::EXTENSIONS.to_owned(),
            atomic_decoders: false,
            gate_capability_on_decoders: false,
        }
    }
}
