//! Listing handlers: the composite feed and pass-through writes.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult, ValidatedJson};
use domain::{AggregatedListing, CreateListing, Listing, ListingId, ListingQuery};

use crate::clients::Relayed;
use crate::state::AppState;

/// Create listing routes
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route("/:id", get(get_listing))
}

/// List listings with their owners embedded
///
/// Owners that cannot be fetched are replaced by `"user": null` and a
/// `reason` of `not_found` or `unavailable`; the listing itself is kept.
#[utoipa::path(
    get,
    path = "/public-api/listings",
    tag = "Listings",
    params(
        ("user_id" = Option<i64>, Query, description = "Only listings owned by this user")
    ),
    responses(
        (status = 200, description = "Listings in store order", body = Vec<AggregatedListing>),
        (status = 400, description = "Invalid query"),
        (status = 502, description = "Listing store unavailable")
    )
)]
pub async fn list_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> AppResult<Json<Vec<AggregatedListing>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let feed = state.aggregator.aggregate(query).await?;
    Ok(Json(feed))
}

/// Create a listing
///
/// `user_id` is forwarded as given; it is not checked against the user store.
#[utoipa::path(
    post,
    path = "/public-api/listings",
    tag = "Listings",
    request_body = CreateListing,
    responses(
        (status = 201, description = "Listing created", body = Listing),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Listing store unavailable"),
        (status = 504, description = "Listing store timed out")
    )
)]
pub async fn create_listing(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateListing>,
) -> AppResult<Relayed<Listing>> {
    state.listing_client.create_listing(&payload).await
}

/// Get listing by ID
#[utoipa::path(
    get,
    path = "/public-api/listings/{id}",
    tag = "Listings",
    params(
        ("id" = i64, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing", body = Listing),
        (status = 404, description = "Listing not found"),
        (status = 502, description = "Listing store unavailable")
    )
)]
pub async fn get_listing(
    State(state): State<AppState>,
    id: Result<Path<ListingId>, PathRejection>,
) -> AppResult<Relayed<Listing>> {
    let Path(id) = id.map_err(|_| AppError::validation("Invalid listing ID format."))?;
    state.listing_client.get_listing(id).await
}
