//! # Extension Protocol Tests
//!
//! Extension letters, capability bits and `register_extension`.

use rstest::rstest;
use rvdbg_core::common::RegistrationError;
use rvdbg_core::core::CpuData;
use rvdbg_core::isa::extension::Extension;
use rvdbg_core::isa::table::{InstrTable, add_instr};

use crate::common::harness::TestContext;

#[rstest]
#[case(Extension::A, 0)]
#[case(Extension::C, 2)]
#[case(Extension::D, 3)]
#[case(Extension::F, 5)]
#[case(Extension::I, 8)]
#[case(Extension::M, 12)]
#[case(Extension::S, 18)]
#[case(Extension::U, 20)]
fn test_capability_bit_is_letter_offset(#[case] ext: Extension, #[case] bit: u32) {
    assert_eq!(ext.bit_index(), bit);
    assert_eq!(ext.capability_bit(), 1u64 << bit);
}

#[test]
fn test_from_letter_is_case_insensitive() {
    assert_eq!(Extension::from_letter('a'), Some(Extension::A));
    assert_eq!(Extension::from_letter('M'), Some(Extension::M));
    assert_eq!(Extension::from_letter('Q'), None);
}

#[test]
fn test_try_from_unknown_letter() {
    assert_eq!(
        Extension::try_from('V'),
        Err(RegistrationError::UnsupportedExtension('V'))
    );
}

#[test]
fn test_all_is_in_bit_order() {
    let bits: Vec<u32> = Extension::ALL.iter().map(|e| e.bit_index()).collect();
    let mut sorted = bits.clone();
    sorted.sort_unstable();
    assert_eq!(bits, sorted);
}

fn two_instructions(data: &mut CpuData, out: &mut InstrTable) -> Result<(), RegistrationError> {
    add_instr("AMOADD_W", "00000????????????010?????0101111", None, out)?;
    add_instr("AMOSWAP_W", "00001????????????010?????0101111", None, out)?;
    data.set_capability(Extension::A);
    Ok(())
}

fn failing_routine(_data: &mut CpuData, out: &mut InstrTable) -> Result<(), RegistrationError> {
    add_instr("GOOD", "00000????????????010?????0101111", None, out)?;
    add_instr("BAD", "short", None, out)
}

#[test]
fn test_register_extension_invokes_routine() {
    let mut ctx = TestContext::new();
    ctx.register(two_instructions).unwrap();
    assert_eq!(ctx.table.len(), 2);
    assert!(ctx.data.has_capability(Extension::A));
}

#[test]
fn test_register_extension_propagates_error() {
    let mut ctx = TestContext::new();
    let err = ctx.register(failing_routine).unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidWidth { width: 5, .. }));
    assert_eq!(err.mnemonic(), Some("BAD"));
    // What the routine appended before failing stays in place.
    assert!(ctx.table.contains("GOOD"));
    assert_eq!(ctx.data.capabilities(), 0);
}

#[test]
fn test_register_same_routine_twice_reports_duplicate() {
    let mut ctx = TestContext::new();
    ctx.register(two_instructions).unwrap();
    assert_eq!(
        ctx.register(two_instructions).unwrap_err(),
        RegistrationError::DuplicateMnemonic("AMOADD_W".into())
    );
    assert_eq!(ctx.table.len(), 2);
}
