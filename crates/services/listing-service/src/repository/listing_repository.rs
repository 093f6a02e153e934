//! Listing repository with an in-memory storage handle.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{CreateListing, Listing, ListingId, ListingQuery};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Listing repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Find listing by ID
    async fn find_by_id(&self, id: ListingId) -> AppResult<Option<Listing>>;

    /// Create a new listing, assigning the next id
    async fn create(&self, input: CreateListing) -> AppResult<Listing>;

    /// List listings matching the query, in insertion order
    async fn list(&self, query: ListingQuery) -> AppResult<Vec<Listing>>;
}

#[derive(Debug, Default)]
struct ListingTable {
    last_id: ListingId,
    rows: BTreeMap<ListingId, Listing>,
}

/// In-memory listing storage owned by one service instance.
#[derive(Debug, Default)]
pub struct ListingStore {
    table: RwLock<ListingTable>,
}

impl ListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingRepository for ListingStore {
    async fn find_by_id(&self, id: ListingId) -> AppResult<Option<Listing>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: CreateListing) -> AppResult<Listing> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let listing = Listing::new(table.last_id, input);
        table.rows.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn list(&self, query: ListingQuery) -> AppResult<Vec<Listing>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|listing| query.matches(listing))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ListingType;

    fn input(user_id: i64, price: i64) -> CreateListing {
        CreateListing {
            user_id,
            listing_type: ListingType::Sale,
            price,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = ListingStore::new();
        let a = store.create(input(1, 10)).await.unwrap();
        let b = store.create(input(1, 20)).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.find_by_id(2).await.unwrap(), Some(b));
        assert_eq!(store.find_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_filters_by_owner_and_keeps_order() {
        let store = ListingStore::new();
        store.create(input(1, 10)).await.unwrap();
        store.create(input(2, 20)).await.unwrap();
        store.create(input(1, 30)).await.unwrap();

        let all = store.list(ListingQuery::default()).await.unwrap();
        assert_eq!(all.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let owned = store.list(ListingQuery::for_user(1)).await.unwrap();
        assert_eq!(owned.iter().map(|l| l.price).collect::<Vec<_>>(), vec![10, 30]);
    }
}
