//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{health_routes, listing_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Prefix shared by every client-facing route
pub const PUBLIC_API_PREFIX: &str = "/public-api";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // users -> user store, listings -> listing store (+ composite feed)
        .nest(
            PUBLIC_API_PREFIX,
            Router::new()
                .nest("/users", user_routes())
                .nest("/listings", listing_routes()),
        )
        .with_state(state)
}
