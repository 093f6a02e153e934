//! API Gateway Library
//!
//! The public HTTP API. It owns no data: single-entity requests are relayed
//! to the owning store, and the listing feed is assembled per request from
//! both stores.

pub mod aggregator;
pub mod clients;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the gateway as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    user_port: u16,
    listing_port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env().with_local_stores(host, user_port, listing_port);
    run_server_with_config(host, port, config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("-> Proxying to user-service at {}", config.user_service_url);
    info!("-> Proxying to listing-service at {}", config.listing_service_url);

    let state = AppState::from_config(config)?;

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await?;

    Ok(())
}

/// Serve the gateway on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = create_router(state).layer(TraceLayer::new_for_http());
    axum::serve(listener, app).await
}
