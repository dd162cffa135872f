//! # Descriptor Table Tests
//!
//! Registration validation, lookup, iteration order and decode priority.

use pretty_assertions::assert_eq;
use rvdbg_core::common::RegistrationError;
use rvdbg_core::core::CpuData;
use rvdbg_core::isa::pattern::BitPattern;
use rvdbg_core::isa::table::{InstrTable, InstructionDescriptor, add_instr};

use crate::common::harness::scratch_handler;

const AMOADD_W: &str = "00000????????????010?????0101111";
const AMOSWAP_W: &str = "00001????????????010?????0101111";

#[test]
fn test_add_valid_pattern() {
    let mut table = InstrTable::new();
    add_instr("AMOADD_W", AMOADD_W, None, &mut table).unwrap();

    assert_eq!(table.len(), 1);
    let desc = table.get("AMOADD_W").unwrap();
    assert_eq!(desc.mnemonic(), "AMOADD_W");
    assert_eq!(desc.pattern().to_string(), AMOADD_W);
    assert!(desc.handler().is_none());
}

#[test]
fn test_duplicate_mnemonic_rejected_on_second() {
    let mut table = InstrTable::new();
    add_instr("AMOADD_W", AMOADD_W, None, &mut table).unwrap();

    let err = add_instr("AMOADD_W", AMOSWAP_W, None, &mut table).unwrap_err();
    assert_eq!(err, RegistrationError::DuplicateMnemonic("AMOADD_W".into()));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("AMOADD_W").unwrap().pattern().to_string(), AMOADD_W);
}

#[test]
fn test_malformed_pattern_leaves_table_unchanged() {
    let mut table = InstrTable::new();
    add_instr("AMOADD_W", AMOADD_W, None, &mut table).unwrap();

    assert!(matches!(
        add_instr("SHORT", "0101111", None, &mut table),
        Err(RegistrationError::InvalidWidth { width: 7, .. })
    ));
    assert!(matches!(
        add_instr("BADCHAR", "00000????????????010?????01011x1", None, &mut table),
        Err(RegistrationError::InvalidCharacter { ch: 'x', position: 30, .. })
    ));
    assert_eq!(table.len(), 1);
    assert!(!table.contains("SHORT"));
    assert!(!table.contains("BADCHAR"));
}

#[test]
fn test_empty_mnemonic_rejected() {
    let mut table = InstrTable::new();
    assert_eq!(
        add_instr("  ", AMOADD_W, None, &mut table).unwrap_err(),
        RegistrationError::EmptyMnemonic
    );
    assert!(table.is_empty());
}

#[test]
fn test_iteration_follows_registration_order() {
    let mut table = InstrTable::new();
    table.add("C", AMOSWAP_W, None).unwrap();
    table.add("A", AMOADD_W, None).unwrap();
    table.add("B", &"?".repeat(32), None).unwrap();

    let names: Vec<&str> = table.iter().map(InstructionDescriptor::mnemonic).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_decode_picks_matching_descriptor() {
    let mut table = InstrTable::new();
    table.add("AMOADD_W", AMOADD_W, None).unwrap();
    table.add("AMOSWAP_W", AMOSWAP_W, None).unwrap();

    assert_eq!(table.decode(0x0020_A02F).unwrap().mnemonic(), "AMOADD_W");
    assert_eq!(table.decode(0x0820_A02F).unwrap().mnemonic(), "AMOSWAP_W");
    // addi x0, x0, 0
    assert!(table.decode(0x0000_0013).is_none());
}

#[test]
fn test_decode_prefers_most_specific_pattern() {
    let mut table = InstrTable::new();
    table.add("ANY_AMO", "?????????????????????????0101111", None).unwrap();
    table.add("ANYTHING", &"?".repeat(32), None).unwrap();
    table.add("AMOADD_W", AMOADD_W, None).unwrap();

    assert_eq!(table.decode(0x0020_A02F).unwrap().mnemonic(), "AMOADD_W");
    assert_eq!(table.decode(0x0820_A02F).unwrap().mnemonic(), "ANY_AMO");
    assert_eq!(table.decode(0x0000_0013).unwrap().mnemonic(), "ANYTHING");
}

#[test]
fn test_decode_tie_goes_to_earliest_registration() {
    let mut table = InstrTable::new();
    table.add("FIRST", AMOADD_W, None).unwrap();
    table.add("SECOND", AMOADD_W, None).unwrap();
    assert_eq!(table.decode(0x0020_A02F).unwrap().mnemonic(), "FIRST");
}

#[test]
fn test_decode_considers_patterns_with_open_opcode_bits() {
    let mut table = InstrTable::new();
    // Opcode bits 0-1 are wildcards, so this cannot be bucketed by opcode.
    table.add("LOW_OPEN", "00000????????????010?????01011??", None).unwrap();
    assert_eq!(table.decode(0x0020_A02F).unwrap().mnemonic(), "LOW_OPEN");
    assert_eq!(table.decode(0x0020_A02C).unwrap().mnemonic(), "LOW_OPEN");
}

#[test]
fn test_insert_prebuilt_descriptor() {
    let mut table = InstrTable::new();
    let pattern = BitPattern::from_masks(0xF800_707F, 0x0000_202F);
    table
        .insert(InstructionDescriptor::new("AMOADD_W", pattern, None))
        .unwrap();
    assert_eq!(table.get("AMOADD_W").unwrap().pattern().to_string(), AMOADD_W);
}

#[test]
fn test_handler_invoked_through_descriptor() {
    let mut table = InstrTable::new();
    table.add("AMOADD_W", AMOADD_W, Some(scratch_handler)).unwrap();
    table.add("AMOSWAP_W", AMOSWAP_W, None).unwrap();
    let mut data = CpuData::new();

    let desc = table.decode(0x0020_A02F).unwrap();
    assert!(desc.execute(&mut data, 0x0020_A02F));
    assert_eq!(data.csr_read(0x340), 0x0020_A02F);

    let no_handler = table.decode(0x0820_A02F).unwrap();
    assert!(!no_handler.execute(&mut data, 0x0820_A02F));
    assert_eq!(data.csr_read(0x340), 0x0020_A02F);
}

#[test]
fn test_table_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InstrTable>();
}
