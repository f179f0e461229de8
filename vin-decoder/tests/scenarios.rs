// Worked examples from 49 CFR 565.15 applied to a 1991 Honda Accord VIN
use vin_decoder::{
    check_digit, decode, model_year, transliterate, validate, verify, Decoder, DecoderConfig,
    DecoderError, Vin,
};

const HONDA: &str = "1HGBH41JXMN109186";

#[test]
fn validates_known_good_vin() {
    assert!(validate(HONDA));
    assert_eq!(check_digit(HONDA).unwrap(), 'X');
}

#[test]
fn rejects_wrong_check_digit() {
    assert!(!validate("2HGBH41JXMN109186"));
    assert!(matches!(
        verify("2HGBH41JXMN109186"),
        Err(DecoderError::ChecksumMismatch { actual: 'X', .. })
    ));
}

#[test]
fn rejects_short_vin() {
    assert!(!validate("1HGBH41JXMN10918"));
    assert_eq!(
        verify("1HGBH41JXMN10918"),
        Err(DecoderError::InvalidLength(16))
    );
}

#[test]
fn transliterates_second_character() {
    let c = HONDA.chars().nth(1).unwrap();
    assert_eq!(c, 'H');
    assert_eq!(transliterate(c).unwrap(), 8);
}

#[test]
fn decomposes_fields() {
    let decoded = decode(HONDA).unwrap();

    assert_eq!(decoded.wmi, "1HG");
    assert_eq!(decoded.vehicle_attributes, "BH41J");
    assert_eq!(decoded.check_digit, 'X');
    assert_eq!(decoded.model_year_code, 'M');
    // 'M' is 2021 in the table; position 7 is the digit '1', so 2021 - 30
    assert_eq!(decoded.model_year, Some(1991));
    assert_eq!(decoded.plant_code, 'N');
    assert_eq!(decoded.serial_number, "109186");
}

#[test]
fn model_year_cycle_follows_position_seven() {
    assert_eq!(model_year::resolve('A', 'K').unwrap(), 2010);
    assert_eq!(model_year::resolve('A', '3').unwrap(), 1980);
}

#[test]
fn decoder_facade_matches_validated_vin() {
    let vin: Vin = HONDA.parse().unwrap();
    let decoded = Decoder::with_config(DecoderConfig::new())
        .decode(HONDA)
        .unwrap();

    assert_eq!(vin.decode(), decoded);
    assert_eq!(decoded.to_vin_string(), vin.as_str());
}

#[test]
fn recent_vin_uses_letter_cycle() {
    // 2021 Tesla Model 3: position 7 is 'E', a letter
    let vin = "5YJ3E1EA1MF000001";
    let expected = check_digit(vin).unwrap();
    let fixed: String = vin
        .chars()
        .enumerate()
        .map(|(i, c)| if i == 8 { expected } else { c })
        .collect();

    let decoded = Decoder::new().decode(&fixed).unwrap();
    assert_eq!(decoded.model_year, Some(2021));
}
