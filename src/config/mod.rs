// src/config/mod.rs

pub mod mnemonic_config;

// Re-export main types for convenience
pub use mnemonic_config::{MnemonicConfig, BenchmarkConfig};
