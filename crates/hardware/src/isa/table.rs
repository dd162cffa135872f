//! Instruction descriptor table.
//!
//! The table is the output collection extension routines append to. It owns
//! every `InstructionDescriptor` for the lifetime of the registry and answers
//! two questions: "is this mnemonic registered?" and "which descriptor decodes
//! this word?".
//!
//! Descriptors whose pattern fixes the full 7-bit major opcode are bucketed by
//! it, so decode only scans the handful of entries sharing the word's opcode
//! plus any patterns that leave opcode bits open.

use std::collections::HashMap;

use crate::common::RegistrationError;
use crate::core::CpuData;
use crate::isa::instruction::InstructionBits;
use crate::isa::pattern::BitPattern;

/// Execution handler attached to a descriptor.
///
/// Receives the CPU-type metadata and the raw instruction word. The registry
/// never calls it on its own; it is handed back to the caller on decode.
pub type InstrHandler = fn(&mut CpuData, u32);

/// A registered instruction: mnemonic, bit pattern and optional handler.
///
/// Never mutated after insertion.
#[derive(Clone, Debug)]
pub struct InstructionDescriptor {
    mnemonic: String,
    pattern: BitPattern,
    handler: Option<InstrHandler>,
}

impl InstructionDescriptor {
    /// Creates a descriptor from an already-parsed pattern.
    pub fn new(mnemonic: impl Into<String>, pattern: BitPattern, handler: Option<InstrHandler>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            pattern,
            handler,
        }
    }

    /// Instruction mnemonic (e.g. `AMOADD_W`).
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Bit pattern the descriptor decodes.
    pub const fn pattern(&self) -> &BitPattern {
        &self.pattern
    }

    /// Execution handler, if one was registered.
    pub const fn handler(&self) -> Option<InstrHandler> {
        self.handler
    }

    /// Runs the handler against `data` for `word`.
    ///
    /// Returns `false` without touching `data` when no handler is attached.
    pub fn execute(&self, data: &mut CpuData, word: u32) -> bool {
        self.handler.is_some_and(|handler| {
            handler(data, word);
            true
        })
    }
}

/// Ordered collection of instruction descriptors with unique mnemonics.
#[derive(Clone, Debug, Default)]
pub struct InstrTable {
    entries: Vec<InstructionDescriptor>,
    by_mnemonic: HashMap<String, usize>,
    by_opcode: HashMap<u32, Vec<usize>>,
    unbucketed: Vec<usize>,
}

impl InstrTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `pattern` and appends a descriptor for `mnemonic`.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] if the mnemonic is empty or already
    /// registered, or the pattern is malformed. The table is unchanged on error.
    pub fn add(
        &mut self,
        mnemonic: &str,
        pattern: &str,
        handler: Option<InstrHandler>,
    ) -> Result<(), RegistrationError> {
        let pattern = BitPattern::parse(mnemonic, pattern)?;
        self.insert(InstructionDescriptor::new(mnemonic, pattern, handler))
    }

    /// Appends a pre-built descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::EmptyMnemonic`] or
    /// [`RegistrationError::DuplicateMnemonic`]; the table is unchanged on error.
    pub fn insert(&mut self, desc: InstructionDescriptor) -> Result<(), RegistrationError> {
        if desc.mnemonic.trim().is_empty() {
            return Err(RegistrationError::EmptyMnemonic);
        }
        if self.by_mnemonic.contains_key(&desc.mnemonic) {
            return Err(RegistrationError::DuplicateMnemonic(desc.mnemonic));
        }

        if let Some(prev) = self.entries.iter().find(|e| e.pattern.overlaps(&desc.pattern)) {
            tracing::debug!(
                mnemonic = %desc.mnemonic,
                other = %prev.mnemonic,
                "instruction pattern overlaps an earlier registration"
            );
        }

        let idx = self.entries.len();
        match desc.pattern.opcode() {
            Some(op) => self.by_opcode.entry(op).or_default().push(idx),
            None => self.unbucketed.push(idx),
        }
        let _ = self.by_mnemonic.insert(desc.mnemonic.clone(), idx);
        tracing::debug!(mnemonic = %desc.mnemonic, pattern = %desc.pattern, "registered instruction");
        self.entries.push(desc);
        Ok(())
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a descriptor up by mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&InstructionDescriptor> {
        self.by_mnemonic.get(mnemonic).map(|&idx| &self.entries[idx])
    }

    /// Returns `true` if `mnemonic` is registered.
    pub fn contains(&self, mnemonic: &str) -> bool {
        self.by_mnemonic.contains_key(mnemonic)
    }

    /// Iterates descriptors in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstructionDescriptor> {
        self.entries.iter()
    }

    /// Finds the descriptor that decodes `word`.
    ///
    /// When several patterns match, the one with the most fixed bits wins;
    /// ties go to the earliest registration.
    pub fn decode(&self, word: u32) -> Option<&InstructionDescriptor> {
        let bucket = self
            .by_opcode
            .get(&word.opcode())
            .map_or(&[][..], Vec::as_slice);

        let mut best: Option<(u32, usize)> = None;
        for &idx in bucket.iter().chain(&self.unbucketed) {
            let pattern = &self.entries[idx].pattern;
            if !pattern.matches(word) {
                continue;
            }
            let fixed = pattern.fixed_bits();
            let better = match best {
                None => true,
                Some((best_fixed, best_idx)) => {
                    fixed > best_fixed || (fixed == best_fixed && idx < best_idx)
                }
            };
            if better {
                best = Some((fixed, idx));
            }
        }
        best.map(|(_, idx)| &self.entries[idx])
    }
}

impl<'a> IntoIterator for &'a InstrTable {
    type Item = &'a InstructionDescriptor;
    type IntoIter = std::slice::Iter<'a, InstructionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs a descriptor and appends it to `out`.
///
/// Free-function form used by extension registration routines.
///
/// # Errors
///
/// See [`InstrTable::add`].
pub fn add_instr(
    mnemonic: &str,
    pattern: &str,
    handler: Option<InstrHandler>,
    out: &mut InstrTable,
) -> Result<(), RegistrationError> {
    out.add(mnemonic, pattern, handler)
}
