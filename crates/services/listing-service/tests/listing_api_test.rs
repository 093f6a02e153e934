//! HTTP contract tests for the listing store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use listing_service_lib::{create_router, state::AppState};

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn listing(user_id: i64, listing_type: &str, price: i64) -> Value {
    json!({"user_id": user_id, "listing_type": listing_type, "price": price})
}

#[tokio::test]
async fn test_create_listing() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/listings",
        Some(listing(1, "rent", 5_000_000)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "user_id": 1, "listing_type": "rent", "price": 5000000})
    );
}

#[tokio::test]
async fn test_create_listing_validation() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/listings", Some(listing(1, "rent", -1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Price must not be negative");

    let (status, _) = send(&app, Method::POST, "/listings", Some(listing(1, "lease", 1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/listings",
        Some(json!({"listing_type": "rent", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/listings", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_listings_by_owner() {
    let app = app();
    send(&app, Method::POST, "/listings", Some(listing(1, "rent", 10))).await;
    send(&app, Method::POST, "/listings", Some(listing(2, "sale", 20))).await;
    send(&app, Method::POST, "/listings", Some(listing(1, "sale", 30))).await;

    let (status, all) = send(&app, Method::GET, "/listings", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let (status, owned) = send(&app, Method::GET, "/listings?user_id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owned.as_array().unwrap().len(), 2);
    assert!(owned
        .as_array()
        .unwrap()
        .iter()
        .all(|l| l["user_id"] == 1));
}

#[tokio::test]
async fn test_invalid_query_is_rejected() {
    let (status, body) = send(&app(), Method::GET, "/listings?user_id=abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_listing() {
    let app = app();
    send(&app, Method::POST, "/listings", Some(listing(9, "sale", 70))).await;

    let (status, body) = send(&app, Method::GET, "/listings/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 9);

    let (status, body) = send(&app, Method::GET, "/listings/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Listing with id 2 not found");
}
