//! HTTP client for listing-service.

use async_trait::async_trait;

use common::{AppResult, DownstreamConfig};
use domain::{CreateListing, Listing, ListingId, ListingQuery};

use super::{Downstream, DownstreamError, Relayed};
use crate::aggregator::ListingSource;

/// HTTP client wrapper for listing-service.
#[derive(Debug, Clone)]
pub struct ListingClient {
    downstream: Downstream,
}

impl ListingClient {
    /// Build a client for the listing store at `config.base_url`.
    pub fn new(config: DownstreamConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            downstream: Downstream::new(config)?,
        })
    }

    /// Create a listing. The owner is not checked.
    pub async fn create_listing(&self, input: &CreateListing) -> AppResult<Relayed<Listing>> {
        let request = self.downstream.post("/listings").json(input);
        self.downstream.relay(request).await
    }

    /// Get listing by ID.
    pub async fn get_listing(&self, id: ListingId) -> AppResult<Relayed<Listing>> {
        let request = self.downstream.get(&format!("/listings/{}", id));
        self.downstream.relay(request).await
    }

    pub async fn ping(&self) -> Result<(), DownstreamError> {
        self.downstream.ping().await
    }
}

#[async_trait]
impl ListingSource for ListingClient {
    async fn list_listings(&self, query: ListingQuery) -> Result<Vec<Listing>, DownstreamError> {
        let request = self.downstream.get("/listings").query(&query);
        self.downstream.fetch(request).await
    }
}
