//! VIN Decoder Library
//!
//! A stateless library for validating and decoding 17-character Vehicle
//! Identification Numbers per 49 CFR 565.15.
//!
//! # Architecture
//!
//! The library is layered bottom-up:
//! - Transliteration maps each VIN character to a number
//! - The checksum engine computes and compares the check digit
//! - The decoder splits a VIN into fields and resolves the model year
//!
//! The library does NOT:
//! - Perform any I/O
//! - Resolve manufacturer names (see [`ManufacturerLookup`] for the contract)
//!
//! Command-line handling and the registry client live in the application
//! layer (vin-cli).
//!
//! # Example Usage
//!
//! ```
//! use vin_decoder::{validate, Decoder};
//!
//! assert!(validate("1HGBH41JXMN109186"));
//!
//! let decoded = Decoder::new().decode("1HGBH41JXMN109186").unwrap();
//! assert_eq!(decoded.wmi, "1HG");
//! assert_eq!(decoded.vehicle_attributes, "BH41J");
//! assert_eq!(decoded.model_year, Some(1991));
//! assert_eq!(decoded.serial_number, "109186");
//! ```

// Public modules
pub mod checksum;
pub mod config;
pub mod decoder;
pub mod manufacturer;
pub mod model_year;
pub mod transliterate;
pub mod types;

// Re-export main types for convenience
pub use checksum::{check_digit, validate, verify};
pub use config::DecoderConfig;
pub use decoder::{decode, Decoder};
pub use manufacturer::{LookupError, LookupResult, ManufacturerLookup, ManufacturerRecord};
pub use transliterate::{is_vin_char, transliterate};
pub use types::{DecodedVin, DecoderError, Result, Vin, VIN_LENGTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
