// src/algorithms/mod.rs
//
// Mnemonic generation front end. Validates the phone number once, then hands
// the digits to one of two generators:
//
// Algorithm        Strategy                               Allocation
// ─────────────────────────────────────────────────────────────────────────
// Backtracking     push/pop on one shared buffer          results only
// Accumulating     copy consumed prefix at every level    O(depth) per call
//
// Both produce the same sequence in keypad order. Backtracking is the default.
//
// Usage:
//   let words = generate_mnemonics("2276696")?;
//   let words = generate_with("2276696", MnemonicAlgorithm::Accumulating)?;

pub mod backtracking;
pub mod accumulating;

use log::{debug, info};

use crate::core::{MnemonicError, PhoneNumber};
use crate::keypad::letters_for;

/// Enumeration of available generation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MnemonicAlgorithm {
    /// In-place buffer mutation with undo on return
    #[default]
    Backtracking,

    /// String accumulation with a copied prefix per call
    Accumulating,
}

impl MnemonicAlgorithm {
    pub const ALL: [MnemonicAlgorithm; 2] = [MnemonicAlgorithm::Accumulating, MnemonicAlgorithm::Backtracking];

    /// Returns a human-readable name for the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backtracking => "Backtracking",
            Self::Accumulating => "Accumulating",
        }
    }

    /// Returns the extra allocation per recursion level
    pub fn complexity(&self) -> &'static str {
        match self {
            Self::Backtracking => "O(1) per level, in-place buffer",
            Self::Accumulating => "O(depth) per level, copied prefix",
        }
    }

    /// Runs this algorithm on an already validated number
    pub fn run(&self, number: &PhoneNumber) -> Vec<String> {
        match self {
            Self::Backtracking => backtracking::backtracking(number),
            Self::Accumulating => accumulating::accumulating(number),
        }
    }
}

/// Selects an algorithm from an efficiency flag.
pub fn choose_algorithm(efficient: bool) -> MnemonicAlgorithm {
    if efficient {
        MnemonicAlgorithm::Backtracking
    } else {
        MnemonicAlgorithm::Accumulating
    }
}

/// Generates all mnemonics for a seven-digit phone number.
///
/// Fails with [`MnemonicError::InvalidInput`] before any generation when the
/// input is not exactly seven ASCII digits.
///
/// # Examples
/// ```
/// use phone_mnemonic::algorithms::generate_mnemonics;
///
/// let words = generate_mnemonics("2276696").unwrap();
/// assert!(words.contains(&"acronym".to_string()));
/// assert!(generate_mnemonics("123456").is_err());
/// ```
pub fn generate_mnemonics(phone_number: &str) -> Result<Vec<String>, MnemonicError> {
    generate_with(phone_number, MnemonicAlgorithm::default())
}

/// Generates all mnemonics using a specific algorithm.
pub fn generate_with(phone_number: &str, algorithm: MnemonicAlgorithm) -> Result<Vec<String>, MnemonicError> {
    let number = PhoneNumber::parse(phone_number)?;

    info!("Generating mnemonics for {} using {}", number, algorithm.name());
    info!("Complexity: {}", algorithm.complexity());
    let results = algorithm.run(&number);
    debug!("Expected {}, generated {}", expected_mnemonic_count(&number), results.len());

    Ok(results)
}

/// Number of mnemonics a phone number yields.
///
/// Product over digits of the letter-set size, with silent digits counting as 1.
pub fn expected_mnemonic_count(number: &PhoneNumber) -> usize {
    number
        .digits()
        .iter()
        .map(|&d| letters_for(d).len().max(1))
        .product()
}
