//! # WhatsApp Handoff Configuration
//!
//! Operator contact and payment-asset locations, loaded from environment
//! variables.

use reef_core::{StoreError, StoreResult};
use std::env;

/// WhatsApp handoff configuration
#[derive(Debug, Clone)]
pub struct WaConfig {
    /// Operator number in international format, digits only
    /// (e.g. "6285198326016")
    pub admin_number: String,

    /// Location of the scannable QRIS payment image
    pub qris_image_url: String,
}

impl WaConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ADMIN_WA_NUMBER`
    /// - `QRIS_IMAGE_URL`
    pub fn from_env() -> StoreResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let admin_number = env::var("ADMIN_WA_NUMBER")
            .map_err(|_| StoreError::Configuration("ADMIN_WA_NUMBER not set".to_string()))?;

        let qris_image_url = env::var("QRIS_IMAGE_URL")
            .map_err(|_| StoreError::Configuration("QRIS_IMAGE_URL not set".to_string()))?;

        let config = Self::new(admin_number, qris_image_url);
        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(admin_number: impl Into<String>, qris_image_url: impl Into<String>) -> Self {
        Self {
            admin_number: admin_number.into(),
            qris_image_url: qris_image_url.into(),
        }
    }

    fn validate(&self) -> StoreResult<()> {
        if self.admin_number.is_empty() || !self.admin_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(StoreError::Configuration(
                "ADMIN_WA_NUMBER must be digits only, international format".to_string(),
            ));
        }

        if !self.qris_image_url.starts_with("http://")
            && !self.qris_image_url.starts_with("https://")
        {
            return Err(StoreError::Configuration(
                "QRIS_IMAGE_URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = WaConfig::new("6285198326016", "https://example.com/qris.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_numeric_operator() {
        let config = WaConfig::new("+62 851-9832", "https://example.com/qris.png");
        assert!(matches!(
            config.validate(),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_asset_url() {
        let config = WaConfig::new("6285198326016", "ftp://example.com/qris.png");
        assert!(matches!(
            config.validate(),
            Err(StoreError::Configuration(_))
        ));
    }
}
