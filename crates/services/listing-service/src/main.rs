//! Listing Service - HTTP store for listing records.

use clap::{Parser, Subcommand};

use listing_service_lib::config::ListingServiceConfig;

#[derive(Parser)]
#[command(name = "listing-service")]
#[command(about = "Listing store microservice")]
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
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info");

    let cli = Cli::parse();
    let config = ListingServiceConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            listing_service_lib::run_embedded(&host, port).await?;
        }
    }

    Ok(())
}
