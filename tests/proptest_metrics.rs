//! Property-based tests for the encoder and the similarity metrics.
//!
//! The encoder properties pin down its contract rather than individual
//! vectors: totality over arbitrary Unicode input, the 32-symbol cap, the
//! closed output alphabet, and the reflexive/symmetric equality relation.
//! The metric properties cover the usual distance/similarity laws.

use libmetaphone::distance::edit_distance;
use libmetaphone::phonetic::{double_metaphone, phonetic_eq, MAX_CODE_LEN};
use libmetaphone::similarity::{dice_coefficient, jaro_winkler};
use proptest::prelude::*;

/// Every symbol the encoder can emit ('0' is a symbol, not the digit).
const CODE_ALPHABET: &str = "0AFHJKLMNPRSTX";

// String generators
fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,20}").unwrap()
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{0,16}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Encoder Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn encoder_is_total(word in arb_unicode_string()) {
        // must terminate and never panic, whatever the input
        let _ = double_metaphone(&word);
    }

    #[test]
    fn encoder_respects_the_cap(word in arb_unicode_string()) {
        let codes = double_metaphone(&word);
        prop_assert!(codes.primary.chars().count() <= MAX_CODE_LEN);
        prop_assert!(codes.secondary.chars().count() <= MAX_CODE_LEN);
    }

    #[test]
    fn encoder_output_alphabet_is_closed(word in arb_unicode_string()) {
        let codes = double_metaphone(&word);
        for c in codes.primary.chars().chain(codes.secondary.chars()) {
            prop_assert!(
                CODE_ALPHABET.contains(c),
                "unexpected symbol '{}' for input {:?}",
                c,
                word
            );
        }
    }

    #[test]
    fn encoder_is_case_insensitive(word in arb_word()) {
        let lower = double_metaphone(&word.to_ascii_lowercase());
        let upper = double_metaphone(&word.to_ascii_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn phonetic_eq_is_reflexive(word in arb_unicode_string()) {
        prop_assert!(phonetic_eq(&word, &word));
    }

    #[test]
    fn phonetic_eq_is_symmetric(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(phonetic_eq(&a, &b), phonetic_eq(&b, &a));
    }
}

// ============================================================================
// Edit Distance Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn edit_distance_identity(a in arb_string()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn edit_distance_indiscernible(a in arb_string(), b in arb_string()) {
        if edit_distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn edit_distance_symmetric(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn edit_distance_triangle_inequality(
        a in arb_string(),
        b in arb_string(),
        c in arb_string()
    ) {
        let d_ac = edit_distance(&a, &c);
        let d_ab = edit_distance(&a, &b);
        let d_bc = edit_distance(&b, &c);
        prop_assert!(
            d_ac <= d_ab + d_bc,
            "triangle inequality violated: {} > {} + {}",
            d_ac, d_ab, d_bc
        );
    }

    #[test]
    fn edit_distance_single_append_costs_one(a in arb_string(), c in proptest::char::range('a', 'z')) {
        let mut longer = a.clone();
        longer.push(c);
        prop_assert_eq!(edit_distance(&a, &longer), 1);
    }
}

// ============================================================================
// Similarity Score Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn jaro_winkler_in_unit_interval(a in arb_string(), b in arb_string()) {
        let score = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn jaro_winkler_symmetric(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(jaro_winkler(&a, &b), jaro_winkler(&b, &a));
    }

    #[test]
    fn jaro_winkler_identical_is_one(a in prop::string::string_regex("[a-z]{1,20}").unwrap()) {
        prop_assert_eq!(jaro_winkler(&a, &a), 1.0);
    }

    #[test]
    fn dice_in_unit_interval(a in arb_string(), b in arb_string()) {
        let score = dice_coefficient(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn dice_symmetric(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(dice_coefficient(&a, &b), dice_coefficient(&b, &a));
    }

    #[test]
    fn dice_short_input_is_zero(a in prop::string::string_regex("[a-z]{0,1}").unwrap(), b in arb_string()) {
        prop_assert_eq!(dice_coefficient(&a, &b), 0.0);
    }

    #[test]
    fn dice_identical_is_one(a in prop::string::string_regex("[a-z]{2,20}").unwrap()) {
        prop_assert_eq!(dice_coefficient(&a, &a), 1.0);
    }
}
