//! Character transliteration
//!
//! Maps each VIN character to the number it contributes to the check digit
//! sum (49 CFR 565.15, Table I).

use crate::types::{DecoderError, Result};

/// Position in this key, modulo 10, is the transliterated value.
/// `.` marks slots with no legal character (I, O, Q and the gaps between).
const TRANSLITERATION_KEY: &str = "0123456789.ABCDEFGH..JKLMN.P.R..STUVWXYZ";

/// Filler for unused slots in [`TRANSLITERATION_KEY`]
const UNUSED_SLOT: char = '.';

/// Convert a VIN character to its numeric value in `0..=9`
///
/// Digits map to themselves. Letters map per the standard's table, so `A`
/// and `J` are 1, `S` is 2, and so on.
///
/// # Errors
/// Returns [`DecoderError::MalformedCharacter`] for anything outside the legal
/// VIN alphabet, including `I`, `O`, `Q` and lowercase letters.
///
/// # Example
/// ```
/// use vin_decoder::transliterate;
///
/// assert_eq!(transliterate('H').unwrap(), 8);
/// assert!(transliterate('O').is_err());
/// ```
pub fn transliterate(c: char) -> Result<u32> {
    if c == UNUSED_SLOT {
        return Err(malformed(c));
    }

    // The key is ASCII, so the byte offset is also the character offset
    TRANSLITERATION_KEY
        .find(c)
        .map(|index| (index % 10) as u32)
        .ok_or_else(|| malformed(c))
}

/// Check whether `c` belongs to the VIN alphabet `0-9A-HJ-NPR-Z`
pub fn is_vin_char(c: char) -> bool {
    c != UNUSED_SLOT && TRANSLITERATION_KEY.contains(c)
}

fn malformed(character: char) -> DecoderError {
    DecoderError::MalformedCharacter {
        character,
        position: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_themselves() {
        for (value, c) in ('0'..='9').enumerate() {
            assert_eq!(transliterate(c).unwrap(), value as u32);
        }
    }

    #[test]
    fn test_letter_values() {
        let expected = [
            ('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 6), ('G', 7), ('H', 8),
            ('J', 1), ('K', 2), ('L', 3), ('M', 4), ('N', 5), ('P', 7), ('R', 9),
            ('S', 2), ('T', 3), ('U', 4), ('V', 5), ('W', 6), ('X', 7), ('Y', 8), ('Z', 9),
        ];

        for (c, value) in expected {
            assert_eq!(transliterate(c).unwrap(), value, "character {}", c);
        }
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        for c in ['I', 'O', 'Q', 'a', 'h', '.', '-', ' ', 'é'] {
            assert_eq!(
                transliterate(c),
                Err(DecoderError::MalformedCharacter {
                    character: c,
                    position: None
                })
            );
            assert!(!is_vin_char(c));
        }
    }

    #[test]
    fn test_alphabet_size() {
        let legal = ('0'..='9').chain('A'..='Z').filter(|&c| is_vin_char(c)).count();
        assert_eq!(legal, 33);
    }
}
