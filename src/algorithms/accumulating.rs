// src/algorithms/accumulating.rs
//
// Reference generation that rebuilds state at every level: the consumed digit
// prefix is copied into each call and letters are looked up through the hashed
// keypad map. Slower than backtracking, kept as an independent check and as
// the baseline for benchmarks.

use log::debug;

use crate::core::PhoneNumber;
use crate::keypad::KEYPAD_MAP;

/// Generates every mnemonic for `number` by string accumulation.
///
/// Produces the same sequence as [`backtracking`](super::backtracking::backtracking).
pub fn accumulating(number: &PhoneNumber) -> Vec<String> {
    let mut results = Vec::new();
    let mut so_far = String::new();

    accumulate(number.digits(), Vec::new(), &mut so_far, &mut results);

    debug!("Accumulating: {} mnemonics for {}", results.len(), number);
    results
}

fn accumulate(digits: &[u8], mut consumed: Vec<u8>, so_far: &mut String, results: &mut Vec<String>) {
    if consumed.as_slice() == digits {
        results.push(so_far.clone());
        return;
    }

    let next = digits[consumed.len()];
    let letters = KEYPAD_MAP.get(&next).copied().unwrap_or("");
    consumed.push(next);

    if letters.is_empty() {
        accumulate(digits, consumed, so_far, results);
    } else {
        for letter in letters.chars() {
            so_far.push(letter);
            accumulate(digits, consumed.clone(), so_far, results);
            so_far.truncate(so_far.len() - letter.len_utf8());
        }
    }
}
