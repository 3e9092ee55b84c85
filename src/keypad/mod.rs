// src/keypad/mod.rs

pub mod letter_table;

// Re-export main items for convenience
pub use letter_table::{letters_for, KEYPAD_LETTERS, KEYPAD_MAP};
