//! Shared configuration structures.

use std::time::Duration;

/// Connection settings for one downstream store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamConfig {
    /// Service name for logging and error messages
    pub service_name: String,
    /// Base address (e.g., "http://localhost:7000")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Per-call timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl DownstreamConfig {
    pub fn new(
        service_name: impl Into<String>,
        base_url: impl Into<String>,
        connect_timeout_ms: u64,
        request_timeout_ms: u64,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            base_url: base_url.into(),
            connect_timeout_ms,
            request_timeout_ms,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Join a path onto the base address without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Read a parsed environment variable, falling back on absence or parse failure.
pub fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
