//! Core types for the VIN decoder library
//!
//! This module defines the values the decoder accepts and emits. The decoder is
//! stateless: a [`Vin`] is validated once on construction and a [`DecodedVin`]
//! is a transient view of its fixed-position fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Errors that can occur while validating or decoding a VIN
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoderError {
    #[error("Invalid VIN length: expected 17 characters, got {0}")]
    InvalidLength(usize),

    #[error("Check digit mismatch: computed '{expected}', VIN has '{actual}'")]
    ChecksumMismatch { expected: char, actual: char },

    #[error("Malformed VIN character {character:?}{}", describe_position(.position))]
    MalformedCharacter {
        character: char,
        /// 1-indexed VIN position, when the character came from a full VIN
        position: Option<usize>,
    },

    #[error("Unknown model year code: '{0}'")]
    UnknownModelYearCode(char),
}

fn describe_position(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!(" at position {}", position),
        None => String::new(),
    }
}

/// A validated Vehicle Identification Number
///
/// Holding a `Vin` means the string is exactly 17 characters from the legal
/// alphabet (`0-9A-HJ-NPR-Z`) and its check digit matches. The value is
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Validate `input` and wrap it
    ///
    /// # Example
    /// ```
    /// use vin_decoder::Vin;
    ///
    /// let vin = Vin::parse("1HGBH41JXMN109186").unwrap();
    /// assert_eq!(vin.wmi(), "1HG");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        crate::checksum::verify(input)?;
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// World Manufacturer Identifier (positions 1-3)
    pub fn wmi(&self) -> &str {
        &self.0[0..3]
    }

    /// Vehicle Descriptor Section, attributes plus check digit (positions 4-9)
    pub fn vds(&self) -> &str {
        &self.0[3..9]
    }

    /// Vehicle Identifier Section (positions 10-17)
    pub fn vis(&self) -> &str {
        &self.0[9..17]
    }

    /// The supplied check digit (position 9)
    pub fn check_digit(&self) -> char {
        self.0.as_bytes()[8] as char
    }

    /// Split into fields. Infallible since the VIN was validated on construction.
    pub fn decode(&self) -> DecodedVin {
        crate::decoder::split_fields(&self.0)
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Vin {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = DecoderError;

    fn try_from(value: String) -> Result<Self> {
        crate::checksum::verify(&value)?;
        Ok(Self(value))
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fields of a VIN, split by fixed position
///
/// The fields partition the 17 source characters with no overlap and no gap,
/// so [`DecodedVin::to_vin_string`] always reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedVin {
    /// World Manufacturer Identifier (3 chars)
    pub wmi: String,
    /// Vehicle attributes (5 chars)
    pub vehicle_attributes: String,
    /// Check digit, `0-9` or `X`
    pub check_digit: char,
    /// Model year code as it appears in the VIN
    pub model_year_code: char,
    /// Resolved calendar year, `None` when the code is not in the table
    pub model_year: Option<u16>,
    /// Assembly plant code
    pub plant_code: char,
    /// Sequential production number (6 chars)
    pub serial_number: String,
}

impl DecodedVin {
    /// Re-concatenate the fields in VIN order
    pub fn to_vin_string(&self) -> String {
        let mut vin = String::with_capacity(VIN_LENGTH);
        vin.push_str(&self.wmi);
        vin.push_str(&self.vehicle_attributes);
        vin.push(self.check_digit);
        vin.push(self.model_year_code);
        vin.push(self.plant_code);
        vin.push_str(&self.serial_number);
        vin
    }

    /// Vehicle Descriptor Section (attributes plus check digit)
    pub fn vds(&self) -> String {
        format!("{}{}", self.vehicle_attributes, self.check_digit)
    }

    /// Vehicle Identifier Section (model year, plant, serial)
    pub fn vis(&self) -> String {
        format!(
            "{}{}{}",
            self.model_year_code, self.plant_code, self.serial_number
        )
    }
}

impl fmt::Display for DecodedVin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model_year {
            Some(year) => write!(f, "{} ({}, {})", self.to_vin_string(), self.wmi, year),
            None => write!(f, "{} ({}, unknown year)", self.to_vin_string(), self.wmi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HONDA: &str = "1HGBH41JXMN109186";

    #[test]
    fn test_vin_sections() {
        let vin = Vin::parse(HONDA).unwrap();
        assert_eq!(vin.wmi(), "1HG");
        assert_eq!(vin.vds(), "BH41JX");
        assert_eq!(vin.vis(), "MN109186");
        assert_eq!(vin.check_digit(), 'X');
        assert_eq!(vin.to_string(), HONDA);
    }

    #[test]
    fn test_vin_rejects_bad_input() {
        assert_eq!(
            Vin::parse("1HGBH41JXMN10918"),
            Err(DecoderError::InvalidLength(16))
        );
        assert!(matches!(
            "2HGBH41JXMN109186".parse::<Vin>(),
            Err(DecoderError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_vin_try_from_string_validates() {
        let vin = Vin::try_from(HONDA.to_string()).unwrap();
        assert_eq!(String::from(vin), HONDA);
        assert!(Vin::try_from("2HGBH41JXMN109186".to_string()).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DecoderError::MalformedCharacter {
            character: 'I',
            position: Some(4),
        };
        assert_eq!(err.to_string(), "Malformed VIN character 'I' at position 4");

        let err = DecoderError::MalformedCharacter {
            character: 'q',
            position: None,
        };
        assert_eq!(err.to_string(), "Malformed VIN character 'q'");

        assert_eq!(
            DecoderError::InvalidLength(3).to_string(),
            "Invalid VIN length: expected 17 characters, got 3"
        );
    }

    #[test]
    fn test_decoded_display() {
        let decoded = Vin::parse(HONDA).unwrap().decode();
        assert_eq!(decoded.to_string(), "1HGBH41JXMN109186 (1HG, 1991)");
        assert_eq!(decoded.vds(), "BH41JX");
        assert_eq!(decoded.vis(), "MN109186");
    }
}
