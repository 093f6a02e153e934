//! Application state for dependency injection.

use std::sync::Arc;

use crate::aggregator::{ListingAggregator, ListingSource, UserDirectory};
use crate::clients::{ListingClient, UserClient};
use crate::config::GatewayConfig;

/// Application state shared across handlers.
///
/// Holds clients only; the gateway keeps no entity data between requests.
#[derive(Clone)]
pub struct AppState {
    pub user_client: Arc<UserClient>,
    pub listing_client: Arc<ListingClient>,
    pub aggregator: Arc<ListingAggregator>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        user_client: Arc<UserClient>,
        listing_client: Arc<ListingClient>,
        config: GatewayConfig,
    ) -> Self {
        let listings: Arc<dyn ListingSource> = listing_client.clone();
        let users: Arc<dyn UserDirectory> = user_client.clone();
        let aggregator = Arc::new(ListingAggregator::new(
            listings,
            users,
            config.fanout_policy(),
        ));

        Self {
            user_client,
            listing_client,
            aggregator,
            config,
        }
    }

    /// Build clients for the stores named in `config`.
    pub fn from_config(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let user_client = Arc::new(UserClient::new(config.user_downstream())?);
        let listing_client = Arc::new(ListingClient::new(config.listing_downstream())?);
        Ok(Self::new(user_client, listing_client, config))
    }
}
