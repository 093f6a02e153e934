//! User pass-through handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Router,
};

use common::{AppError, AppResult, ValidatedJson};
use domain::{CreateUser, User, UserId};

use crate::clients::Relayed;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/public-api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 502, description = "User store unavailable"),
        (status = 504, description = "User store timed out")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Relayed<User>> {
    state.user_client.create_user(&payload).await
}

/// List all users
#[utoipa::path(
    get,
    path = "/public-api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 502, description = "User store unavailable")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Relayed<Vec<User>>> {
    state.user_client.list_users().await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/public-api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found"),
        (status = 502, description = "User store unavailable")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> AppResult<Relayed<User>> {
    let Path(id) = id.map_err(|_| AppError::validation("Invalid user ID format."))?;
    state.user_client.get_user(id).await
}
