//! User service configuration.

use std::env;

use common::env_parse;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.host),
            port: env_parse("USER_SERVICE_PORT", defaults.port),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7000,
        }
    }
}
