//! Combined binary for development - runs all services in one process.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "listings-platform")]
#[command(about = "Combined stores and gateway for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both stores and the gateway in a single process
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value = "8000")]
        gateway_port: u16,
        #[arg(long, default_value = "7000")]
        user_port: u16,
        #[arg(long, default_value = "6000")]
        listing_port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            gateway_port,
            user_port,
            listing_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Gateway:         http://{}:{}", host, gateway_port);
            info!("  User service:    http://{}:{}", host, user_port);
            info!("  Listing service: http://{}:{}", host, listing_port);

            let user_host = host.clone();
            let user_handle = tokio::spawn(async move {
                if let Err(e) = user_service_lib::run_embedded(&user_host, user_port).await {
                    error!("User service failed: {}", e);
                }
            });

            let listing_host = host.clone();
            let listing_handle = tokio::spawn(async move {
                if let Err(e) = listing_service_lib::run_embedded(&listing_host, listing_port).await
                {
                    error!("Listing service failed: {}", e);
                }
            });

            // Give the stores a moment to bind before the gateway starts serving
            tokio::time::sleep(Duration::from_millis(200)).await;

            let gateway_host = host.clone();
            let gateway_handle = tokio::spawn(async move {
                if let Err(e) =
                    gateway_lib::run_embedded(&gateway_host, gateway_port, user_port, listing_port)
                        .await
                {
                    error!("Gateway failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = user_handle => {
                    error!("User service exited unexpectedly");
                }
                _ = listing_handle => {
                    error!("Listing service exited unexpectedly");
                }
                _ = gateway_handle => {
                    error!("Gateway exited unexpectedly");
                }
            }
        }
    }

    Ok(())
}
