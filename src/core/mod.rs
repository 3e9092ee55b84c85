// src/core/mod.rs

pub mod error;
pub mod phone_number;

pub use error::{InputViolation, MnemonicError};
pub use phone_number::{PhoneNumber, PHONE_NUMBER_LENGTH};
