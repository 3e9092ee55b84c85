// src/core/phone_number.rs

use std::fmt;
use std::str::FromStr;
use log::trace;

use crate::core::error::MnemonicError;

/// Number of digits in a phone number accepted by the generator.
pub const PHONE_NUMBER_LENGTH: usize = 7;

/// A validated seven-digit phone number, stored as digit values 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    digits: [u8; PHONE_NUMBER_LENGTH],
}

impl PhoneNumber {
    /// Parses a phone number from its textual form.
    ///
    /// The length is checked first, counted in characters, so `"123456"` reports a
    /// length error even though it is all digits. Then every character must be an
    /// ASCII digit; the first offending character is reported.
    ///
    /// # Examples
    /// ```
    /// use phone_mnemonic::core::PhoneNumber;
    ///
    /// let number = PhoneNumber::parse("2276696").unwrap();
    /// assert_eq!(number.digits(), &[2, 2, 7, 6, 6, 9, 6]);
    /// assert!(PhoneNumber::parse("123456").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, MnemonicError> {
        let length = input.chars().count();
        if length != PHONE_NUMBER_LENGTH {
            return Err(MnemonicError::wrong_length(PHONE_NUMBER_LENGTH, length));
        }

        let mut digits = [0u8; PHONE_NUMBER_LENGTH];
        for (position, c) in input.chars().enumerate() {
            if !c.is_ascii_digit() {
                return Err(MnemonicError::non_digit(position, c));
            }
            digits[position] = c as u8 - b'0';
        }

        trace!("Parsed phone number {}", input);
        Ok(PhoneNumber { digits })
    }

    pub fn digits(&self) -> &[u8; PHONE_NUMBER_LENGTH] {
        &self.digits
    }

    /// Count of digits (0 or 1) that contribute no letter.
    pub fn silent_digit_count(&self) -> usize {
        self.digits.iter().filter(|&&d| d <= 1).count()
    }

    /// Length of every mnemonic generated from this number.
    pub fn mnemonic_length(&self) -> usize {
        PHONE_NUMBER_LENGTH - self.silent_digit_count()
    }
}

impl FromStr for PhoneNumber {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneNumber::parse(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = MnemonicError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PhoneNumber::parse(value)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InputViolation;

    #[test]
    fn test_parse_valid() {
        let number = PhoneNumber::parse("1234567").unwrap();
        assert_eq!(number.digits(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(number.to_string(), "1234567");
    }

    #[test]
    fn test_parse_too_short() {
        let err = PhoneNumber::parse("123456").unwrap_err();
        assert_eq!(err.violation(), &InputViolation::WrongLength { expected: 7, actual: 6 });
    }

    #[test]
    fn test_parse_too_long() {
        let err = PhoneNumber::parse("12345678").unwrap_err();
        assert_eq!(err.violation(), &InputViolation::WrongLength { expected: 7, actual: 8 });
    }

    #[test]
    fn test_parse_empty() {
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn test_parse_non_digit() {
        let err = PhoneNumber::parse("555-123").unwrap_err();
        assert_eq!(err.violation(), &InputViolation::NonDigit { position: 3, found: '-' });
    }

    #[test]
    fn test_length_counted_in_characters() {
        // Seven characters, more than seven bytes
        let err = PhoneNumber::parse("12345é7").unwrap_err();
        assert_eq!(err.violation(), &InputViolation::NonDigit { position: 5, found: 'é' });
    }

    #[test]
    fn test_silent_digits() {
        let number: PhoneNumber = "1010234".parse().unwrap();
        assert_eq!(number.silent_digit_count(), 4);
        assert_eq!(number.mnemonic_length(), 3);
    }

    #[test]
    fn test_try_from() {
        assert!(PhoneNumber::try_from("8675309").is_ok());
        assert!(PhoneNumber::try_from("867530a").is_err());
    }
}
