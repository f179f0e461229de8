//! Standalone check digit walkthrough
//!
//! Prints the transliterated value, weight and product for every position of
//! a VIN, then the sum and the resulting check digit.
//!
//! Usage:
//!   explain_check_digit <VIN>
//!
//! Example:
//!   RUST_LOG=trace explain_check_digit 1HGBH41JXMN109186

use std::env;
use vin_decoder::checksum::WEIGHTS;
use vin_decoder::{check_digit, transliterate, verify, DecoderError};

fn main() {
    env_logger::init();

    let Some(vin) = env::args().nth(1) else {
        eprintln!("Usage: explain_check_digit <VIN>");
        std::process::exit(1);
    };

    println!("Pos  Char  Value  Weight  Product");
    let mut sum = 0;
    for (index, (c, weight)) in vin.chars().zip(WEIGHTS).enumerate() {
        match transliterate(c) {
            Ok(value) => {
                sum += value * weight;
                println!("{:>3}  {:>4}  {:>5}  {:>6}  {:>7}", index + 1, c, value, weight, value * weight);
            }
            Err(e) => println!("{:>3}  {:>4}  {}", index + 1, c, e),
        }
    }
    println!("\nSum: {} (mod 11 = {})", sum, sum % 11);

    match check_digit(&vin) {
        Ok(digit) => println!("Check digit: {}", digit),
        Err(e) => println!("Cannot compute check digit: {}", e),
    }

    match verify(&vin) {
        Ok(()) => println!("VIN is valid"),
        Err(DecoderError::ChecksumMismatch { expected, actual }) => {
            println!("VIN is invalid: position 9 is '{}', expected '{}'", actual, expected)
        }
        Err(e) => println!("VIN is invalid: {}", e),
    }
}
