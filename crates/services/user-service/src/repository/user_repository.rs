//! User repository with an in-memory storage handle.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{CreateUser, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a new user, assigning the next id
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;
}

#[derive(Debug, Default)]
struct UserTable {
    last_id: UserId,
    rows: BTreeMap<UserId, User>,
}

/// In-memory user storage owned by one service instance.
///
/// Ids start at 1 and are never reused, so key order is insertion order.
#[derive(Debug, Default)]
pub struct UserStore {
    table: RwLock<UserTable>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let user = User::new(table.last_id, input);
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = UserStore::new();
        let first = store.create(CreateUser::new("Siti")).await.unwrap();
        let second = store.create(CreateUser::new("Budi")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = UserStore::new();
        let created = store.create(CreateUser::new("Siti")).await.unwrap();

        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(store.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = UserStore::new();
        for name in ["A", "B", "C"] {
            store.create(CreateUser::new(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
