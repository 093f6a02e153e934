//! Shared transport for talking to one downstream store.
//!
//! Every call carries the configured connect and per-call timeouts and is
//! sent exactly once. Retrying is left to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use common::{AppError, AppResult, DownstreamConfig, ErrorResponse};

/// Transport-level failure of a downstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownstreamError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl DownstreamError {
    /// Classify for a request that depends on this call alone.
    pub fn into_app_error(self, service: &str) -> AppError {
        match self {
            DownstreamError::Timeout => AppError::downstream_timeout(service),
            other => AppError::downstream_unavailable(service, other.to_string()),
        }
    }
}

impl From<reqwest::Error> for DownstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DownstreamError::Timeout
        } else if err.is_connect() {
            DownstreamError::Connect(err.to_string())
        } else if err.is_decode() {
            DownstreamError::Malformed(err.to_string())
        } else {
            DownstreamError::Transport(err.to_string())
        }
    }
}

/// Outcome of a single-entity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The store returned the entity
    Found(T),
    /// The store reported no such entity
    NotFound,
    /// The store could not be asked or answered garbage
    Unavailable(DownstreamError),
}

/// A downstream success relayed to the client with its original status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relayed<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> IntoResponse for Relayed<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP connection to one downstream store.
#[derive(Debug, Clone)]
pub struct Downstream {
    http: Client,
    config: DownstreamConfig,
}

impl Downstream {
    /// Build a client with the configured timeouts.
    pub fn new(config: DownstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Service name used in logs and error messages
    pub fn service(&self) -> &str {
        &self.config.service_name
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        debug!("GET {} on {}", path, self.service());
        self.http.get(self.config.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        debug!("POST {} on {}", path, self.service());
        self.http.post(self.config.url(path))
    }

    /// Fetch a single entity and fold the outcome into a `Lookup`.
    pub async fn lookup<T: DeserializeOwned>(&self, path: &str) -> Lookup<T> {
        let response = match self.get(path).send().await {
            Ok(response) => response,
            Err(e) => return Lookup::Unavailable(e.into()),
        };

        match response.status() {
            StatusCode::NOT_FOUND => Lookup::NotFound,
            status if status.is_success() => match response.json::<T>().await {
                Ok(body) => Lookup::Found(body),
                Err(e) => Lookup::Unavailable(e.into()),
            },
            status => Lookup::Unavailable(DownstreamError::Status(status.as_u16())),
        }
    }

    /// Send a request whose only acceptable answer is a 2xx JSON body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, DownstreamError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownstreamError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    /// Forward a pass-through request.
    ///
    /// Success is relayed with the store's status code; anything else is
    /// classified into an `AppError`.
    pub async fn relay<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<Relayed<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| DownstreamError::from(e).into_app_error(self.service()))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json::<T>()
                .await
                .map_err(|e| DownstreamError::from(e).into_app_error(self.service()))?;
            return Ok(Relayed { status, body });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Could not read {} error body from {}: {}",
                    status,
                    self.service(),
                    e
                );
                Default::default()
            }
        };
        Err(classify_rejection(self.service(), status, &body))
    }

    /// Probe the store's health endpoint.
    pub async fn ping(&self) -> Result<(), DownstreamError> {
        let response = self.get("/health").send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DownstreamError::Status(status.as_u16()))
        }
    }
}

/// Map a non-success store response onto the gateway's error taxonomy.
///
/// Client errors keep the store's own message when it sent the standard
/// envelope; server errors never leak their body.
pub fn classify_rejection(service: &str, status: StatusCode, body: &[u8]) -> AppError {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .map(|envelope| envelope.error.message);

    match status {
        StatusCode::NOT_FOUND => {
            AppError::not_found(message.unwrap_or_else(|| "Resource not found".to_string()))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::validation(message.unwrap_or_else(|| format!("Rejected by {}", service)))
        }
        status if status.is_client_error() => {
            AppError::bad_request(message.unwrap_or_else(|| status.to_string()))
        }
        status => AppError::downstream_unavailable(
            service,
            DownstreamError::Status(status.as_u16()).to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(code: &str, message: &str) -> Vec<u8> {
        json!({"error": {"code": code, "message": message}})
            .to_string()
            .into_bytes()
    }

    #[test]
    fn test_store_validation_message_is_kept() {
        let body = envelope("VALIDATION_ERROR", "Name cannot be empty");
        let err = classify_rejection("user-service", StatusCode::BAD_REQUEST, &body);

        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Name cannot be empty"));
    }

    #[test]
    fn test_store_not_found() {
        let body = envelope("NOT_FOUND", "User with id 3 not found");
        let err = classify_rejection("user-service", StatusCode::NOT_FOUND, &body);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "User with id 3 not found");

        let err = classify_rejection("user-service", StatusCode::NOT_FOUND, b"<html>");
        assert_eq!(err.user_message(), "Resource not found");
    }

    #[test]
    fn test_server_errors_become_gateway_errors() {
        let err = classify_rejection(
            "listing-service",
            StatusCode::INTERNAL_SERVER_ERROR,
            b"stack trace",
        );
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "DOWNSTREAM_UNAVAILABLE");
        assert!(!err.user_message().contains("stack trace"));
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let err = DownstreamError::Timeout.into_app_error("user-service");
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);

        let err = DownstreamError::Connect("refused".into()).into_app_error("user-service");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_relayed_keeps_status() {
        let response = Relayed {
            status: StatusCode::CREATED,
            body: json!({"id": 1}),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_truncated_error_body_still_classified() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            // Promise 64 bytes, send 8, then hang up.
            socket
                .write_all(b"HTTP/1.1 404 Not Found\r\ncontent-length: 64\r\n\r\n{\"error\"")
                .await
                .unwrap();
        });

        let downstream = Downstream::new(DownstreamConfig::new(
            "user-service",
            format!("http://{}", addr),
            1000,
            1000,
        ))
        .unwrap();
        let err = downstream
            .relay::<serde_json::Value>(downstream.get("/users/1"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Resource not found");
    }
}
