//! Repository layer for data access.

mod listing_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use listing_repository::MockListingRepository;
pub use listing_repository::{ListingRepository, ListingStore};
