//! Common utilities shared across the gateway and the stores.
//!
//! This crate provides:
//! - Unified HTTP error handling and the JSON error envelope
//! - A validating JSON extractor
//! - Configuration structures
//! - Tracing initialisation for the binaries

pub mod config;
pub mod error;
pub mod extract;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, ErrorResponse, OptionExt};
pub use extract::ValidatedJson;
