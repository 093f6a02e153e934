//! User Service Library
//!
//! The user store: owns user records and exposes them over HTTP+JSON.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod repository;
pub mod service;
pub mod state;

use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::user_routes;
use crate::state::AppState;

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    run_server(host, port, AppState::in_memory()).await
}

/// Build the HTTP router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/users", user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the store on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, create_router(state)).await
}

/// Run the HTTP server over the given state.
async fn run_server(
    host: &str,
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("User service listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
