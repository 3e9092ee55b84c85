// src/keypad/letter_table.rs
//
// Standard telephone keypad letter assignment. Digits 0 and 1 carry no letters.

use std::collections::HashMap;
use lazy_static::lazy_static;

/// Letters printed on each keypad button, indexed by digit value.
pub const KEYPAD_LETTERS: [&str; 10] = [
    "",     // 0
    "",     // 1
    "abc",  // 2
    "def",  // 3
    "ghi",  // 4
    "jkl",  // 5
    "mno",  // 6
    "pqrs", // 7
    "tuv",  // 8
    "wxyz", // 9
];

lazy_static! {
    /// Keyed view of the same table, built once on first access.
    pub static ref KEYPAD_MAP: HashMap<u8, &'static str> = KEYPAD_LETTERS
        .iter()
        .enumerate()
        .map(|(digit, letters)| (digit as u8, *letters))
        .collect();
}

/// Returns the letters for a digit value in keypad order.
///
/// Digits outside 0..=9 have no button and yield an empty string, the same as 0 and 1.
pub fn letters_for(digit: u8) -> &'static str {
    KEYPAD_LETTERS.get(digit as usize).copied().unwrap_or("")
}
