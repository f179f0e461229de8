//! Check digit computation and validation
//!
//! The weights come from 49 CFR 565.15 Table IV
//! (<https://www.law.cornell.edu/cfr/text/49/565.15>). Each transliterated
//! character is multiplied by the weight of its position, the products are
//! summed and the remainder modulo 11 selects the check digit.

use crate::transliterate::transliterate;
use crate::types::{DecoderError, Result, VIN_LENGTH};

/// Check digit for each remainder modulo 11. `X` stands in for 10.
const CHECK_DIGIT_MAP: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X'];

/// Position weights, `8765432X098765432` in the standard's notation.
/// Position 9 is the check digit itself and carries weight 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// 0-indexed position of the check digit
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Compute the check digit a VIN should carry
///
/// The character currently at position 9 is ignored (weight 0), so this can be
/// used to fill in the check digit of a VIN under construction.
///
/// # Errors
/// * [`DecoderError::InvalidLength`] if `vin` is not 17 characters
/// * [`DecoderError::MalformedCharacter`] for the first character outside the
///   VIN alphabet
///
/// # Example
/// ```
/// use vin_decoder::check_digit;
///
/// assert_eq!(check_digit("1HGBH41JXMN109186").unwrap(), 'X');
/// ```
pub fn check_digit(vin: &str) -> Result<char> {
    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(DecoderError::InvalidLength(length));
    }

    let mut sum = 0;
    for (index, (c, weight)) in vin.chars().zip(WEIGHTS).enumerate() {
        let value = transliterate(c).map_err(|_| DecoderError::MalformedCharacter {
            character: c,
            position: Some(index + 1),
        })?;
        sum += value * weight;
    }

    let digit = CHECK_DIGIT_MAP[(sum % 11) as usize];
    log::trace!("Weighted sum for {}: {} -> check digit '{}'", vin, sum, digit);
    Ok(digit)
}

/// Check a VIN's length, alphabet and check digit, reporting the first problem
pub fn verify(vin: &str) -> Result<()> {
    let expected = check_digit(vin)?;

    // check_digit already enforced the length
    let actual = vin
        .chars()
        .nth(CHECK_DIGIT_INDEX)
        .ok_or(DecoderError::InvalidLength(vin.chars().count()))?;

    if expected != actual {
        log::debug!(
            "Check digit mismatch for {}: expected '{}', found '{}'",
            vin,
            expected,
            actual
        );
        return Err(DecoderError::ChecksumMismatch { expected, actual });
    }

    Ok(())
}

/// Validate a VIN by its length and check digit
///
/// A VIN is either valid or invalid; use [`verify`] to learn why it failed.
///
/// # Example
/// ```
/// use vin_decoder::validate;
///
/// assert!(validate("1HGBH41JXMN109186"));
/// assert!(!validate("2HGBH41JXMN109186"));
/// assert!(!validate("1HGBH41JXMN10918"));
/// ```
pub fn validate(vin: &str) -> bool {
    verify(vin).is_ok()
}
