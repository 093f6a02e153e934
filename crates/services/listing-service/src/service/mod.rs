//! Service layer for listing use cases.

mod listing_service;

pub use listing_service::{ListingManager, ListingService};
