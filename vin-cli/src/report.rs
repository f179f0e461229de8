//! Report generation
//!
//! Combines the locally decoded fields with the optional manufacturer lookup
//! and renders the result as text or JSON. A failed lookup only changes the
//! manufacturer section; the decoded fields are always shown.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use vin_decoder::{DecodedVin, Decoder, ManufacturerLookup, ManufacturerRecord};

/// Outcome of the manufacturer lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManufacturerStatus {
    /// No lookup was attempted (offline, disabled, or invalid VIN)
    Skipped,
    Found { records: Vec<ManufacturerRecord> },
    Unavailable { reason: String },
}

/// Everything known about one VIN
#[derive(Debug, Clone, Serialize)]
pub struct VinReport {
    pub vin: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<DecodedVin>,
    pub manufacturer: ManufacturerStatus,
    pub decoded_at: DateTime<Utc>,
}

impl VinReport {
    /// Decode `vin` and, if it is valid, resolve its manufacturer
    pub fn build(vin: &str, decoder: &Decoder, lookup: Option<&dyn ManufacturerLookup>) -> Self {
        let decoded_at = Utc::now();

        let decoded = match decoder.decode(vin) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::debug!("VIN {} rejected: {}", vin, e);
                return Self {
                    vin: vin.to_string(),
                    valid: false,
                    error: Some(e.to_string()),
                    decoded: None,
                    manufacturer: ManufacturerStatus::Skipped,
                    decoded_at,
                };
            }
        };

        let manufacturer = match lookup {
            Some(lookup) => match lookup.resolve_decoded(&decoded) {
                Ok(records) => ManufacturerStatus::Found { records },
                Err(e) => {
                    log::warn!("{}", e);
                    ManufacturerStatus::Unavailable {
                        reason: e.to_string(),
                    }
                }
            },
            None => ManufacturerStatus::Skipped,
        };

        Self {
            vin: vin.to_string(),
            valid: true,
            error: None,
            decoded: Some(decoded),
            manufacturer,
            decoded_at,
        }
    }

    /// Machine-readable report
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Human-readable report
impl fmt::Display for VinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(decoded) = &self.decoded else {
            writeln!(f, "Invalid VIN")?;
            if let Some(error) = &self.error {
                writeln!(f, "  Reason: {}", error)?;
            }
            return Ok(());
        };

        writeln!(f, "Information for VIN {}:", self.vin)?;
        writeln!(f, "  WMI:                {}", decoded.wmi)?;
        writeln!(f, "  Vehicle attributes: {}", decoded.vehicle_attributes)?;
        writeln!(f, "  Check digit:        {}", decoded.check_digit)?;
        match decoded.model_year {
            Some(year) => writeln!(
                f,
                "  Model year:         {} (code {})",
                year, decoded.model_year_code
            )?,
            None => writeln!(
                f,
                "  Model year:         unknown (code {})",
                decoded.model_year_code
            )?,
        }
        writeln!(f, "  Plant code:         {}", decoded.plant_code)?;
        writeln!(f, "  Serial number:      {}", decoded.serial_number)?;

        match &self.manufacturer {
            ManufacturerStatus::Skipped => writeln!(f, "  Manufacturer:       lookup skipped"),
            ManufacturerStatus::Found { records } => {
                for record in records {
                    writeln!(
                        f,
                        "  Manufacturer:       {} ({}, {})",
                        record.manufacturer, record.make, record.vehicle_type
                    )?;
                }
                Ok(())
            }
            ManufacturerStatus::Unavailable { reason } => writeln!(
                f,
                "  Manufacturer:       manufacturer information unavailable ({})",
                reason
            ),
        }
    }
}
