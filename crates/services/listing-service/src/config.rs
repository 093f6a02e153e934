//! Listing service configuration.

use std::env;

use common::env_parse;

/// Listing service configuration.
#[derive(Debug, Clone)]
pub struct ListingServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ListingServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("LISTING_SERVICE_HOST").unwrap_or(defaults.host),
            port: env_parse("LISTING_SERVICE_PORT", defaults.port),
        }
    }
}

impl Default for ListingServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6000,
        }
    }
}
