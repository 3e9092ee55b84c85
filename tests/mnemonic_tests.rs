// tests/mnemonic_tests.rs
//
// Integration tests for mnemonic generation through the public API.

use std::collections::HashMap;

use phone_mnemonic::algorithms::{expected_mnemonic_count, generate_mnemonics, generate_with, MnemonicAlgorithm};
use phone_mnemonic::core::{InputViolation, MnemonicError, PhoneNumber};
use phone_mnemonic::keypad::letters_for;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(test)]
mod mnemonic_tests {
    use super::*;

    fn random_number(rng: &mut ChaCha8Rng, digits: std::ops::Range<u8>) -> String {
        (0..7)
            .map(|_| char::from(b'0' + rng.random_range(digits.clone())))
            .collect()
    }

    fn multiset(words: &[String]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for word in words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_acropolis_style_number() {
        let input = "2276696";
        let words = generate_mnemonics(input).unwrap();

        assert_eq!(words.len(), 3888);
        assert!(words.contains(&"acronym".to_string()));

        let digits = PhoneNumber::parse(input).unwrap();
        for word in &words {
            assert_eq!(word.len(), 7);
            for (c, &digit) in word.chars().zip(digits.digits().iter()) {
                assert!(letters_for(digit).contains(c), "{} not on key {}", c, digit);
            }
        }
    }

    #[test]
    fn test_leading_one_is_skipped() {
        let words = generate_mnemonics("1234567").unwrap();

        assert_eq!(words.len(), 3 * 3 * 3 * 3 * 3 * 4);
        assert!(words.iter().all(|w| w.len() == 6));
        assert_eq!(words.first().map(String::as_str), Some("adgjmp"));
        assert_eq!(words.last().map(String::as_str), Some("cfilos"));
    }

    #[test]
    fn test_all_zeros_yields_empty_string() {
        assert_eq!(generate_mnemonics("0000000").unwrap(), vec![String::new()]);
        assert_eq!(generate_mnemonics("1111111").unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_short_number_is_invalid_input() {
        let err = generate_mnemonics("123456").unwrap_err();
        assert!(matches!(
            err,
            MnemonicError::InvalidInput(InputViolation::WrongLength { expected: 7, actual: 6 })
        ));
    }

    #[test]
    fn test_non_digit_is_invalid_input() {
        for input in ["555 123", "abcdefg", "１２３４５６７"] {
            let err = generate_mnemonics(input).unwrap_err();
            assert!(matches!(err, MnemonicError::InvalidInput(InputViolation::NonDigit { .. })), "{}", input);
        }
    }

    #[test]
    fn test_output_is_sorted_in_keypad_order() {
        // Keypad order is alphabetical, so the sequence is sorted
        let words = generate_mnemonics("9876543").unwrap();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
    }

    #[test]
    fn test_count_matches_product_on_random_numbers() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let input = random_number(&mut rng, 0..10);
            let number = PhoneNumber::parse(&input).unwrap();
            let words = generate_mnemonics(&input).unwrap();

            assert_eq!(words.len(), expected_mnemonic_count(&number), "{}", input);
            assert!(words.iter().all(|w| w.len() == number.mnemonic_length()), "{}", input);
        }
    }

    #[test]
    fn test_no_silent_digits_gives_full_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            let input = random_number(&mut rng, 2..10);
            let words = generate_mnemonics(&input).unwrap();
            assert!(words.iter().all(|w| w.len() == 7), "{}", input);
        }
    }

    #[test]
    fn test_algorithms_produce_same_multiset() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut inputs = vec!["2276696".to_string(), "1234567".to_string(), "0000000".to_string()];
        inputs.extend((0..30).map(|_| random_number(&mut rng, 0..10)));

        for input in &inputs {
            let fast = generate_with(input, MnemonicAlgorithm::Backtracking).unwrap();
            let slow = generate_with(input, MnemonicAlgorithm::Accumulating).unwrap();
            assert_eq!(multiset(&fast), multiset(&slow), "{}", input);
            assert_eq!(fast, slow, "{}", input);
        }
    }

    #[test]
    fn test_results_are_distinct() {
        let words = generate_mnemonics("7979797").unwrap();
        assert_eq!(multiset(&words).len(), words.len());
    }
}
