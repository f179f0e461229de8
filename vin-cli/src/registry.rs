//! NHTSA vPIC client for manufacturer lookups
//!
//! Implements [`ManufacturerLookup`] with a single blocking request to the
//! `DecodeWMI` endpoint. No retries and no caching.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use vin_decoder::{LookupError, LookupResult, ManufacturerLookup, ManufacturerRecord};

use crate::config::LookupConfig;

/// vPIC API base URL
pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// User agent string for registry requests
const USER_AGENT_VALUE: &str = concat!("vin-cli/", env!("CARGO_PKG_VERSION"));

/// Manufacturer registry backed by the vPIC API
pub struct VpicRegistry {
    /// Build failure is kept and reported per lookup
    client: Result<Client, String>,
    base_url: String,
}

impl VpicRegistry {
    pub fn new(config: &LookupConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                log::warn!("Failed to create HTTP client: {}", e);
                format!("failed to create HTTP client: {}", e)
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn wmi_url(&self, wmi: &str) -> String {
        format!("{}/DecodeWMI/{}?format=json", self.base_url, wmi)
    }
}

impl ManufacturerLookup for VpicRegistry {
    fn resolve(&self, wmi: &str) -> LookupResult {
        let client = self
            .client
            .as_ref()
            .map_err(|reason| LookupError::Unavailable(reason.clone()))?;

        let url = self.wmi_url(wmi);
        log::info!("Looking up manufacturer for WMI {}", wmi);
        log::debug!("GET {}", url);

        let response = client
            .get(&url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Unavailable(format!(
                "registry returned HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        parse_response(wmi, &body)
    }
}

/// `DecodeWMI` response envelope
#[derive(Debug, Deserialize)]
struct WmiResponse {
    #[serde(rename = "Results")]
    results: Vec<WmiResult>,
}

#[derive(Debug, Deserialize)]
struct WmiResult {
    #[serde(rename = "ManufacturerName")]
    manufacturer_name: Option<String>,
    #[serde(rename = "Make")]
    make: Option<String>,
    #[serde(rename = "VehicleType")]
    vehicle_type: Option<String>,
}

impl From<WmiResult> for ManufacturerRecord {
    fn from(result: WmiResult) -> Self {
        Self {
            manufacturer: result.manufacturer_name.unwrap_or_default(),
            make: result.make.unwrap_or_default(),
            vehicle_type: result.vehicle_type.unwrap_or_default(),
        }
    }
}

/// Parse a `DecodeWMI` JSON body into manufacturer records
pub fn parse_response(wmi: &str, body: &str) -> LookupResult {
    let response: WmiResponse =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    let records: Vec<ManufacturerRecord> = response
        .results
        .into_iter()
        .map(ManufacturerRecord::from)
        .collect();

    if records.is_empty() {
        return Err(LookupError::NoRecords(wmi.to_string()));
    }

    log::debug!("Registry returned {} record(s) for {}", records.len(), wmi);
    Ok(records)
}
