//! Manufacturer lookup capability
//!
//! Resolving a WMI to a manufacturer needs an external registry. The library
//! only defines the contract; transports live in the application layer, so
//! decoding never depends on one.

use crate::types::DecodedVin;
use serde::{Deserialize, Serialize};

/// Result type for manufacturer lookups
pub type LookupResult = std::result::Result<Vec<ManufacturerRecord>, LookupError>;

/// One registry entry for a WMI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    /// Registered manufacturer name
    pub manufacturer: String,
    /// Make (brand)
    pub make: String,
    /// Vehicle type, e.g. "Passenger Car"
    pub vehicle_type: String,
}

/// Lookup failures. None of these invalidate the decoded VIN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Manufacturer registry unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed registry response: {0}")]
    MalformedResponse(String),

    #[error("No manufacturer registered for WMI {0}")]
    NoRecords(String),
}

/// Resolve a World Manufacturer Identifier to manufacturer records
pub trait ManufacturerLookup {
    /// Look up `wmi` (the first three VIN characters)
    fn resolve(&self, wmi: &str) -> LookupResult;

    /// Look up the manufacturer of an already decoded VIN
    fn resolve_decoded(&self, decoded: &DecodedVin) -> LookupResult {
        self.resolve(&decoded.wmi)
    }
}

impl<F> ManufacturerLookup for F
where
    F: Fn(&str) -> LookupResult,
{
    fn resolve(&self, wmi: &str) -> LookupResult {
        self(wmi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    fn honda_registry(wmi: &str) -> LookupResult {
        match wmi {
            "1HG" => Ok(vec![ManufacturerRecord {
                manufacturer: "AMERICAN HONDA MOTOR CO., INC.".to_string(),
                make: "HONDA".to_string(),
                vehicle_type: "Passenger Car".to_string(),
            }]),
            other => Err(LookupError::NoRecords(other.to_string())),
        }
    }

    #[test]
    fn test_closure_lookup() {
        let decoded = decode("1HGBH41JXMN109186").unwrap();
        let records = honda_registry.resolve_decoded(&decoded).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].make, "HONDA");
    }

    #[test]
    fn test_lookup_failure_leaves_decoding_intact() {
        let offline = |_: &str| -> LookupResult {
            Err(LookupError::Unavailable("connection refused".to_string()))
        };

        let decoded = decode("1HGBH41JXMN109186").unwrap();
        assert!(offline.resolve_decoded(&decoded).is_err());
        assert_eq!(decoded.model_year, Some(1991));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LookupError::NoRecords("ZZZ".to_string()).to_string(),
            "No manufacturer registered for WMI ZZZ"
        );
    }
}
