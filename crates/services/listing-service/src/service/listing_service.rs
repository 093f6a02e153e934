//! Listing service - Handles listing-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{CreateListing, DomainError, Listing, ListingId, ListingQuery};

use crate::repository::ListingRepository;

/// Listing service trait for dependency injection.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Get listing by ID
    async fn get_listing(&self, id: ListingId) -> AppResult<Listing>;

    /// List listings, optionally restricted to one owner
    async fn list_listings(&self, query: ListingQuery) -> AppResult<Vec<Listing>>;

    /// Create a new listing.
    ///
    /// The owner is not looked up: listings may reference users that do not
    /// exist (yet).
    async fn create_listing(&self, input: CreateListing) -> AppResult<Listing>;
}

/// Concrete implementation of ListingService using repository.
pub struct ListingManager {
    repo: Arc<dyn ListingRepository>,
}

impl ListingManager {
    /// Create new listing service instance with repository
    pub fn new(repo: Arc<dyn ListingRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ListingService for ListingManager {
    async fn get_listing(&self, id: ListingId) -> AppResult<Listing> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("Listing with id {}", id))
    }

    async fn list_listings(&self, query: ListingQuery) -> AppResult<Vec<Listing>> {
        self.repo.list(query).await
    }

    async fn create_listing(&self, input: CreateListing) -> AppResult<Listing> {
        input.validate().map_err(DomainError::from)?;
        let listing = self.repo.create(input).await?;
        tracing::debug!(
            "Created {} listing {} for user {}",
            listing.listing_type,
            listing.id,
            listing.user_id
        );
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockListingRepository;
    use common::AppError;
    use domain::ListingType;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_listing_not_found() {
        let mut repo = MockListingRepository::new();
        repo.expect_find_by_id().with(eq(7)).returning(|_| Ok(None));

        let service = ListingManager::new(Arc::new(repo));
        let err = service.get_listing(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Listing with id 7 not found");
    }

    #[tokio::test]
    async fn test_list_forwards_query() {
        let mut repo = MockListingRepository::new();
        repo.expect_list()
            .with(eq(ListingQuery::for_user(3)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ListingManager::new(Arc::new(repo));
        let listings = service.list_listings(ListingQuery::for_user(3)).await.unwrap();
        assert!(listings.is_empty());
    }

    #[tokio::test]
    async fn test_create_listing_for_unknown_owner_is_allowed() {
        let mut repo = MockListingRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Listing::new(1, input)));

        let service = ListingManager::new(Arc::new(repo));
        let listing = tokio_test::assert_ok!(
            service
                .create_listing(CreateListing {
                    user_id: 404,
                    listing_type: ListingType::Rent,
                    price: 1,
                })
                .await
        );
        assert_eq!(listing.user_id, 404);
    }

    #[tokio::test]
    async fn test_create_listing_rejects_negative_price() {
        let mut repo = MockListingRepository::new();
        repo.expect_create().times(0);

        let service = ListingManager::new(Arc::new(repo));
        let err = service
            .create_listing(CreateListing {
                user_id: 1,
                listing_type: ListingType::Sale,
                price: -1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Price must not be negative"));
    }
}
