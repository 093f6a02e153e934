//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use domain::DomainError;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
///
/// Malformed JSON, missing or unknown fields and failed `validator` rules
/// all surface as `AppError::Validation`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(DomainError::from)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
        routing::post,
        Router,
    };
    use domain::CreateListing;
    use tower::ServiceExt;

    async fn echo(ValidatedJson(payload): ValidatedJson<CreateListing>) -> String {
        payload.listing_type.to_string()
    }

    async fn post_json(body: &str) -> (StatusCode, String) {
        let app = Router::new().route("/", post(echo));
        let response = app
            .oneshot(
                HttpRequest::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let (status, body) = post_json(r#"{"user_id":1,"listing_type":"sale","price":10}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "sale");
    }

    #[tokio::test]
    async fn test_rule_violation_uses_rule_message() {
        let (status, body) = post_json(r#"{"user_id":1,"listing_type":"rent","price":-5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Price must not be negative"));
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_invalid_enum_is_rejected() {
        let (status, body) = post_json(r#"{"user_id":1,"listing_type":"lease","price":5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }
}
