//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::{ListingRepository, ListingStore};
use crate::service::{ListingManager, ListingService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<dyn ListingService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(listing_service: Arc<dyn ListingService>) -> Self {
        Self { listing_service }
    }

    /// State backed by the given storage handle.
    pub fn with_repository(repo: Arc<dyn ListingRepository>) -> Self {
        Self::new(Arc::new(ListingManager::new(repo)))
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(ListingStore::new()))
    }
}
