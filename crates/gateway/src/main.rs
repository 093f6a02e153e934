//! API Gateway - public HTTP API in front of the user and listing stores.

use clap::{Parser, Subcommand};

use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "Aggregation gateway for the listing and user stores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// User store base address (overrides USER_SERVICE_URL)
        #[arg(long)]
        user_service_url: Option<String>,
        /// Listing store base address (overrides LISTING_SERVICE_URL)
        #[arg(long)]
        listing_service_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info");

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env();

    match cli.command {
        Commands::Serve {
            host,
            port,
            user_service_url,
            listing_service_url,
        } => {
            if let Some(url) = user_service_url {
                config.user_service_url = url;
            }
            if let Some(url) = listing_service_url {
                config.listing_service_url = url;
            }
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            gateway_lib::run_server_with_config(&host, port, config).await?;
        }
    }

    Ok(())
}
