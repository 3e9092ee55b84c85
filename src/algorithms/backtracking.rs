// src/algorithms/backtracking.rs
//
// Backtracking generation: one output buffer shared by the whole search.
// Each letter is pushed before descending and popped on return, so no
// per-level copies are made. Only completed mnemonics are allocated.

use log::debug;

use crate::core::{PhoneNumber, PHONE_NUMBER_LENGTH};
use crate::keypad::letters_for;

/// Generates every mnemonic for `number` in keypad order.
///
/// # Examples
/// ```
/// use phone_mnemonic::core::PhoneNumber;
/// use phone_mnemonic::algorithms::backtracking::backtracking;
///
/// let number = PhoneNumber::parse("0000002").unwrap();
/// assert_eq!(backtracking(&number), vec!["a", "b", "c"]);
/// ```
pub fn backtracking(number: &PhoneNumber) -> Vec<String> {
    let mut results = Vec::new();
    let mut buffer = String::with_capacity(PHONE_NUMBER_LENGTH);

    expand(number.digits(), 0, &mut buffer, &mut results);

    debug!("Backtracking: {} mnemonics for {}", results.len(), number);
    results
}

fn expand(digits: &[u8], consumed: usize, buffer: &mut String, results: &mut Vec<String>) {
    if consumed == digits.len() {
        results.push(buffer.clone());
        return;
    }

    let letters = letters_for(digits[consumed]);

    // 0 and 1 contribute nothing to any descendant
    if letters.is_empty() {
        expand(digits, consumed + 1, buffer, results);
        return;
    }

    for letter in letters.chars() {
        buffer.push(letter);
        expand(digits, consumed + 1, buffer, results);
        buffer.pop();
    }
}
