//! Unified error handling for the gateway and the stores.
//!
//! Every failure is classified into one `AppError` kind before it reaches a
//! client, and is rendered as the same JSON envelope:
//! `{"error": {"code": "...", "message": "..."}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Downstream errors
    #[error("{service} unavailable: {detail}")]
    DownstreamUnavailable { service: String, detail: String },

    #[error("{0} timed out")]
    DownstreamTimeout(String),

    /// The store a composite read is built on could not be reached.
    #[error("Primary store unavailable: {0}")]
    PrimaryUnavailable(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::DownstreamUnavailable { .. } => "DOWNSTREAM_UNAVAILABLE",
            AppError::DownstreamTimeout(_) => "DOWNSTREAM_TIMEOUT",
            AppError::PrimaryUnavailable(_) => "PRIMARY_UNAVAILABLE",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DownstreamUnavailable { .. } | AppError::PrimaryUnavailable(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::DownstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => format!("Invalid input: {}", msg),

            // Hide details for downstream errors
            AppError::DownstreamUnavailable { service, detail } => {
                tracing::error!("Service {} unavailable: {}", service, detail);
                format!("Service {} is unavailable", service)
            }
            AppError::DownstreamTimeout(service) => {
                tracing::error!("Service {} timed out", service);
                format!("Service {} did not respond in time", service)
            }
            AppError::PrimaryUnavailable(detail) => {
                tracing::error!("Primary store unavailable: {}", detail);
                "Listings are currently unavailable".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            err @ DomainError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, what: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, what: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", what.into())))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn downstream_unavailable(service: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::DownstreamUnavailable {
            service: service.into(),
            detail: detail.into(),
        }
    }

    pub fn downstream_timeout(service: impl Into<String>) -> Self {
        AppError::DownstreamTimeout(service.into())
    }

    pub fn primary_unavailable(detail: impl Into<String>) -> Self {
        AppError::PrimaryUnavailable(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::downstream_unavailable("user-service", "refused").status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::downstream_timeout("user-service").status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::primary_unavailable("refused").status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_user_message_hides_internal_detail() {
        let err = AppError::downstream_unavailable("user-service", "tcp connect error 10.0.0.4");
        assert_eq!(err.user_message(), "Service user-service is unavailable");

        let err = AppError::primary_unavailable("connection refused 10.0.0.5:6000");
        assert_eq!(err.user_message(), "Listings are currently unavailable");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err = AppError::from(DomainError::not_found("User with id 4"));
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.user_message(), "User with id 4 not found");

        let err = AppError::from(DomainError::validation("Name cannot be empty"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found("Listing with id 9").unwrap_err();
        assert_eq!(err.to_string(), "Listing with id 9 not found");
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = AppError::validation("Price must not be negative").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.message, "Price must not be negative");
    }
}
