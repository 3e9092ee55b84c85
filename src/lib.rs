// src/lib.rs

pub mod keypad;
pub mod core;
pub mod algorithms;
pub mod config;
pub mod benchmark;

pub use crate::algorithms::{generate_mnemonics, generate_with, MnemonicAlgorithm};
pub use crate::core::{MnemonicError, PhoneNumber};
