//! Registry: owns the CPU-type metadata and the descriptor table side-by-side.
//!
//! Built once from a `Config` during initialization. After construction
//! nothing mutates either half, so a `Registry` can be shared behind an `Arc`
//! by any number of decoding threads without locking.

use crate::common::RegistrationError;
use crate::config::{Config, IsaConfig};
use crate::core::CpuData;
use crate::isa::extension::{Extension, ExtensionRegistrationFn, register_extension};
use crate::isa::rv64a;
use crate::isa::table::{InstrTable, InstructionDescriptor};

/// Frozen CPU metadata plus instruction table.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    data: CpuData,
    table: InstrTable,
}

impl Registry {
    /// Builds a registry by running each configured extension's routine in order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::UnsupportedExtension`] for an extension with
    /// no registration routine, or whatever the routine itself reports.
    pub fn from_config(config: &Config) -> Result<Self, RegistrationError> {
        let mut data = CpuData::new();
        let mut table = InstrTable::new();

        for ext in config.isa.extension_list()? {
            let routine = routine_for(ext, &config.isa)
                .ok_or_else(|| RegistrationError::UnsupportedExtension(ext.letter()))?;

            let was_advertised = data.has_capability(ext);
            let before = table.len();
            tracing::debug!(extension = %ext, "registering extension");
            register_extension(routine, &mut data, &mut table)?;

            if config.isa.gate_capability_on_decoders
                && table.len() == before
                && !was_advertised
                && data.has_capability(ext)
            {
                tracing::warn!(extension = %ext, "no decoders registered, withdrawing capability bit");
                data.clear_capability(ext);
            }
        }

        tracing::info!(
            instructions = table.len(),
            mcpuid = %format!("{:#x}", data.capabilities()),
            "instruction registry ready"
        );
        Ok(Self { data, table })
    }

    /// CPU-type metadata.
    pub const fn data(&self) -> &CpuData {
        &self.data
    }

    /// Instruction table.
    pub const fn table(&self) -> &InstrTable {
        &self.table
    }

    /// Raw `mcpuid` value.
    pub fn capabilities(&self) -> u64 {
        self.data.capabilities()
    }

    /// Finds the descriptor that decodes `word`.
    pub fn decode(&self, word: u32) -> Option<&InstructionDescriptor> {
        self.table.decode(word)
    }

    /// Splits the registry into its parts.
    pub fn into_parts(self) -> (CpuData, InstrTable) {
        (self.data, self.table)
    }
}

/// Selects the registration routine for `ext`, if one exists.
pub fn routine_for(ext: Extension, isa: &IsaConfig) -> Option<ExtensionRegistrationFn> {
    let advertise_a: ExtensionRegistrationFn = |data, out| {
        rv64a::add_isa_extension_a(data, out);
        Ok(())
    };
    let decoders_a: ExtensionRegistrationFn = rv64a::add_isa_extension_a_decoders;

    match ext {
        Extension::A if isa.atomic_decoders => Some(decoders_a),
        Extension::A => Some(advertise_a),
        _ => None,
    }
}
