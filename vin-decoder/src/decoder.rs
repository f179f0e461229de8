//! Main decoder API
//!
//! Splits a VIN into its fixed-position fields and resolves the model year.
//! [`decode`] works on any 17-character ASCII string and does not look at the
//! check digit; [`Decoder::decode`] validates first.

use crate::config::DecoderConfig;
use crate::model_year;
use crate::types::{DecodedVin, DecoderError, Result, Vin, VIN_LENGTH};

/// The decoder facade - validation, decomposition and model year policy
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a new decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Validate and decode a VIN
    ///
    /// # Errors
    /// * Any validation error from [`Vin::parse`]
    /// * [`DecoderError::UnknownModelYearCode`] in strict mode
    ///
    /// # Example
    /// ```
    /// use vin_decoder::Decoder;
    ///
    /// let decoded = Decoder::new().decode("1HGBH41JXMN109186").unwrap();
    /// assert_eq!(decoded.wmi, "1HG");
    /// assert_eq!(decoded.model_year, Some(1991));
    /// ```
    pub fn decode(&self, input: &str) -> Result<DecodedVin> {
        let vin = Vin::parse(input)?;
        let decoded = vin.decode();

        if self.config.strict_model_year && decoded.model_year.is_none() {
            return Err(DecoderError::UnknownModelYearCode(decoded.model_year_code));
        }

        log::debug!("Decoded VIN {}: {:?}", vin, decoded);
        Ok(decoded)
    }
}

/// Split a VIN into fields without checking its check digit
///
/// Callers are expected to have validated the VIN already. Only input that
/// cannot be sliced is rejected.
///
/// # Errors
/// * [`DecoderError::InvalidLength`] if `vin` is not 17 characters
/// * [`DecoderError::MalformedCharacter`] for a non-ASCII character
pub fn decode(vin: &str) -> Result<DecodedVin> {
    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(DecoderError::InvalidLength(length));
    }

    if let Some((index, character)) = vin.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(DecoderError::MalformedCharacter {
            character,
            position: Some(index + 1),
        });
    }

    Ok(split_fields(vin))
}

/// Slice the fields out of a 17-character ASCII VIN
pub(crate) fn split_fields(vin: &str) -> DecodedVin {
    let bytes = vin.as_bytes();
    let model_year_code = bytes[9] as char;
    let position_seven = bytes[6] as char;

    let model_year = match model_year::resolve(model_year_code, position_seven) {
        Ok(year) => Some(year),
        Err(e) => {
            log::warn!("{} in VIN {}; model year left unresolved", e, vin);
            None
        }
    };

    DecodedVin {
        wmi: vin[0..3].to_string(),
        vehicle_attributes: vin[3..8].to_string(),
        check_digit: bytes[8] as char,
        model_year_code,
        model_year,
        plant_code: bytes[10] as char,
        serial_number: vin[11..17].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HONDA: &str = "1HGBH41JXMN109186";

    #[test]
    fn test_decode_fields() {
        let decoded = decode(HONDA).unwrap();
        assert_eq!(decoded.wmi, "1HG");
        assert_eq!(decoded.vehicle_attributes, "BH41J");
        assert_eq!(decoded.check_digit, 'X');
        assert_eq!(decoded.model_year_code, 'M');
        assert_eq!(decoded.model_year, Some(1991));
        assert_eq!(decoded.plant_code, 'N');
        assert_eq!(decoded.serial_number, "109186");
        assert_eq!(decoded.to_vin_string(), HONDA);
    }

    #[test]
    fn test_decode_does_not_check_checksum() {
        let decoded = decode("2HGBH41JXMN109186").unwrap();
        assert_eq!(decoded.wmi, "2HG");
    }

    #[test]
    fn test_decode_unknown_year_code() {
        // 'U' is never a model year code
        let decoded = decode("1HGBH41JXUN109186").unwrap();
        assert_eq!(decoded.model_year_code, 'U');
        assert_eq!(decoded.model_year, None);
    }

    #[test]
    fn test_decode_punctuation_at_position_seven() {
        let decoded = decode("1HGBH4-JXMN109186").unwrap();
        assert_eq!(decoded.model_year, Some(1991));
    }

    #[test]
    fn test_decode_rejects_unsliceable_input() {
        assert_eq!(decode("1HG"), Err(DecoderError::InvalidLength(3)));
        assert_eq!(
            decode("1HGBH41JXMN10918é"),
            Err(DecoderError::MalformedCharacter {
                character: 'é',
                position: Some(17)
            })
        );
    }

    #[test]
    fn test_decoder_validates_first() {
        let decoder = Decoder::new();
        assert!(decoder.decode(HONDA).is_ok());
        assert!(matches!(
            decoder.decode("2HGBH41JXMN109186"),
            Err(DecoderError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_strict_model_year() {
        // 'U' and 'M' transliterate alike, so the check digit still holds
        let vin = "1HGBH41JXUN109186";
        assert!(crate::checksum::validate(vin));

        let lenient = Decoder::new();
        assert_eq!(lenient.decode(vin).unwrap().model_year, None);

        let strict = Decoder::with_config(DecoderConfig::new().with_strict_model_year(true));
        assert!(strict.config().strict_model_year);
        assert_eq!(
            strict.decode(vin),
            Err(DecoderError::UnknownModelYearCode('U'))
        );
        assert!(strict.decode(HONDA).is_ok());
    }
}
