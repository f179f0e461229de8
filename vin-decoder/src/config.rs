//! Decoder configuration types
//!
//! The decoder itself is a pure function of the VIN. Configuration only
//! chooses policy for the cases the standard leaves open.

use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Treat a model year code missing from the table as an error instead of
    /// reporting the year as unresolved
    #[serde(default)]
    pub strict_model_year: bool,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: fail on unknown model year codes
    pub fn with_strict_model_year(mut self, enabled: bool) -> Self {
        self.strict_model_year = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new();
        assert!(!config.strict_model_year);

        let config = config.with_strict_model_year(true);
        assert!(config.strict_model_year);
    }
}
