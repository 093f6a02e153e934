//! Gateway configuration.

use std::env;
use std::time::Duration;

use common::{env_parse, DownstreamConfig};

use crate::aggregator::FanoutPolicy;

/// Service names used in logs and error messages
pub const USER_SERVICE: &str = "user-service";
pub const LISTING_SERVICE: &str = "listing-service";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// User store base address
    pub user_service_url: String,
    /// Listing store base address
    pub listing_service_url: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Downstream connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Per-call downstream timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Deadline for all owner lookups of one composite read, in milliseconds
    pub fanout_deadline_ms: u64,
    /// Maximum owner lookups outstanding per request
    pub max_parallel_fetches: usize,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_service_url: env::var("USER_SERVICE_URL").unwrap_or(defaults.user_service_url),
            listing_service_url: env::var("LISTING_SERVICE_URL")
                .unwrap_or(defaults.listing_service_url),
            host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
            port: env_parse("GATEWAY_PORT", defaults.port),
            connect_timeout_ms: env_parse(
                "DOWNSTREAM_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout_ms,
            ),
            request_timeout_ms: env_parse(
                "DOWNSTREAM_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
            ),
            fanout_deadline_ms: env_parse("FANOUT_DEADLINE_MS", defaults.fanout_deadline_ms),
            max_parallel_fetches: env_parse("MAX_PARALLEL_FETCHES", defaults.max_parallel_fetches),
        }
    }

    /// Point both stores at `host` with the given ports.
    pub fn with_local_stores(mut self, host: &str, user_port: u16, listing_port: u16) -> Self {
        self.user_service_url = format!("http://{}:{}", host, user_port);
        self.listing_service_url = format!("http://{}:{}", host, listing_port);
        self
    }

    pub fn user_downstream(&self) -> DownstreamConfig {
        self.downstream(USER_SERVICE, &self.user_service_url)
    }

    pub fn listing_downstream(&self) -> DownstreamConfig {
        self.downstream(LISTING_SERVICE, &self.listing_service_url)
    }

    pub fn fanout_policy(&self) -> FanoutPolicy {
        FanoutPolicy {
            max_in_flight: self.max_parallel_fetches.max(1),
            deadline: Duration::from_millis(self.fanout_deadline_ms),
        }
    }

    fn downstream(&self, service: &str, base_url: &str) -> DownstreamConfig {
        DownstreamConfig::new(
            service,
            base_url,
            self.connect_timeout_ms,
            self.request_timeout_ms,
        )
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            user_service_url: "http://localhost:7000".to_string(),
            listing_service_url: "http://localhost:6000".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            connect_timeout_ms: 2000,
            request_timeout_ms: 3000,
            fanout_deadline_ms: 5000,
            max_parallel_fetches: 8,
        }
    }
}
