//! Listing handlers.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult, ValidatedJson};
use domain::{CreateListing, Listing, ListingId, ListingQuery};

use crate::state::AppState;

/// Create listing routes
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route("/:id", get(get_listing))
}

/// List listings, optionally filtered by `user_id`
pub async fn list_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Listing>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let listings = state.listing_service.list_listings(query).await?;
    Ok(Json(listings))
}

/// Create a listing
pub async fn create_listing(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateListing>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    let listing = state.listing_service.create_listing(payload).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// Get listing by ID
pub async fn get_listing(
    State(state): State<AppState>,
    id: Result<Path<ListingId>, PathRejection>,
) -> AppResult<Json<Listing>> {
    let Path(id) = id.map_err(|_| AppError::validation("Invalid listing ID format."))?;
    let listing = state.listing_service.get_listing(id).await?;
    Ok(Json(listing))
}
