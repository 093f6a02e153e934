//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{CreateUser, DomainError, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("User with id {}", id))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        input.validate().map_err(DomainError::from)?;
        let user = self.repo.create(input).await?;
        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }
}
