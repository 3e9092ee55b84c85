// src/core/error.rs

use std::error::Error;
use std::fmt;

/// Errors returned by mnemonic generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// The phone number is not exactly seven ASCII digits.
    InvalidInput(InputViolation),
}

/// The specific way a phone number failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputViolation {
    /// Length in characters differs from the required length.
    WrongLength { expected: usize, actual: usize },

    /// A character that is not an ASCII digit, at a zero-based character position.
    NonDigit { position: usize, found: char },
}

impl MnemonicError {
    pub fn wrong_length(expected: usize, actual: usize) -> Self {
        MnemonicError::InvalidInput(InputViolation::WrongLength { expected, actual })
    }

    pub fn non_digit(position: usize, found: char) -> Self {
        MnemonicError::InvalidInput(InputViolation::NonDigit { position, found })
    }

    pub fn violation(&self) -> &InputViolation {
        match self {
            MnemonicError::InvalidInput(violation) => violation,
        }
    }
}

impl fmt::Display for MnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MnemonicError::InvalidInput(violation) => {
                write!(f, "Not a valid phone number: {}", violation)
            }
        }
    }
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputViolation::WrongLength { expected, actual } => {
                write!(f, "expected {} digits, got {}", expected, actual)
            }
            InputViolation::NonDigit { position, found } => {
                write!(f, "character {:?} at position {} is not a digit", found, position)
            }
        }
    }
}

impl Error for MnemonicError {}
