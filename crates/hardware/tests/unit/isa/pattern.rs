//! # Bit Pattern Tests
//!
//! Parsing, rendering and matching of 32-position instruction patterns.

use proptest::prelude::*;
use rstest::rstest;
use rvdbg_core::common::RegistrationError;
use rvdbg_core::isa::pattern::BitPattern;

#[test]
fn test_parse_fixed_pattern() {
    let p = BitPattern::parse("ONES", &"1".repeat(32)).unwrap();
    assert_eq!(p.care(), u32::MAX);
    assert_eq!(p.value(), u32::MAX);
    assert!(p.matches(u32::MAX));
    assert!(!p.matches(u32::MAX - 1));
}

#[test]
fn test_msb_is_first_character() {
    let text = format!("1{}", "0".repeat(31));
    let p = BitPattern::parse("MSB", &text).unwrap();
    assert_eq!(p.value(), 0x8000_0000);
}

#[test]
fn test_lr_w_fixes_rs2() {
    let p = BitPattern::parse("LR_W", "00010??00000?????010?????0101111").unwrap();
    assert_eq!(p.care(), 0xF9F0_707F);
    assert_eq!(p.value(), 0x1000_202F);
    assert_eq!(p.fixed_bits(), 5 + 5 + 3 + 7);
}

#[rstest]
#[case("")]
#[case("0101111")]
#[case("00000????????????010?????010111")]
#[case("00000????????????010?????01011110")]
fn test_wrong_width_rejected(#[case] text: &str) {
    let err = BitPattern::parse("X", text).unwrap_err();
    assert_eq!(
        err,
        RegistrationError::InvalidWidth {
            mnemonic: "X".into(),
            width: text.chars().count(),
            expected: 32,
        }
    );
}

#[rstest]
#[case('x', 0)]
#[case('2', 5)]
#[case('*', 17)]
#[case(' ', 31)]
#[case('é', 12)]
fn test_invalid_character_rejected(#[case] ch: char, #[case] position: usize) {
    let mut chars: Vec<char> = "00000????????????010?????0101111".chars().collect();
    chars[position] = ch;
    let text: String = chars.into_iter().collect();

    let err = BitPattern::parse("BAD", &text).unwrap_err();
    assert_eq!(
        err,
        RegistrationError::InvalidCharacter {
            mnemonic: "BAD".into(),
            ch,
            position,
        }
    );
}

#[test]
fn test_width_counts_characters_not_bytes() {
    // 31 ASCII characters plus one two-byte character is still 32 positions.
    let text = format!("é{}", "0".repeat(31));
    assert!(matches!(
        BitPattern::parse("UTF8", &text),
        Err(RegistrationError::InvalidCharacter { position: 0, .. })
    ));
}

#[test]
fn test_display_renders_source_text() {
    let text = "00010??00000?????011?????0101111";
    let p = BitPattern::parse("LR_D", text).unwrap();
    assert_eq!(p.to_string(), text);
}

#[test]
fn test_overlap_detection() {
    let amo = BitPattern::parse("AMOADD_W", "00000????????????010?????0101111").unwrap();
    let any_amo = BitPattern::parse("AMO", "?????????????????????????0101111").unwrap();
    let swap = BitPattern::parse("AMOSWAP_W", "00001????????????010?????0101111").unwrap();
    assert!(amo.overlaps(&any_amo));
    assert!(!amo.overlaps(&swap));
}

proptest! {
    #[test]
    fn prop_display_then_parse_is_identity(care in any::<u32>(), value in any::<u32>()) {
        let p = BitPattern::from_masks(care, value);
        let reparsed = BitPattern::parse("P", &p.to_string()).unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn prop_matches_iff_fixed_bits_agree(care in any::<u32>(), value in any::<u32>(), word in any::<u32>()) {
        let p = BitPattern::from_masks(care, value);
        prop_assert_eq!(p.matches(word), (word ^ value) & care == 0);
    }

    #[test]
    fn prop_value_always_matches(care in any::<u32>(), value in any::<u32>(), noise in any::<u32>()) {
        let p = BitPattern::from_masks(care, value);
        prop_assert!(p.matches((value & care) | (noise & !care)));
    }
}
