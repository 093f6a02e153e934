//! HTTP client for user-service.

use async_trait::async_trait;

use common::{AppResult, DownstreamConfig};
use domain::{CreateUser, User, UserId};

use super::{Downstream, DownstreamError, Lookup, Relayed};
use crate::aggregator::UserDirectory;

/// HTTP client wrapper for user-service.
#[derive(Debug, Clone)]
pub struct UserClient {
    downstream: Downstream,
}

impl UserClient {
    /// Build a client for the user store at `config.base_url`.
    pub fn new(config: DownstreamConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            downstream: Downstream::new(config)?,
        })
    }

    /// Create a user.
    pub async fn create_user(&self, input: &CreateUser) -> AppResult<Relayed<User>> {
        let request = self.downstream.post("/users").json(input);
        self.downstream.relay(request).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, id: UserId) -> AppResult<Relayed<User>> {
        let request = self.downstream.get(&format!("/users/{}", id));
        self.downstream.relay(request).await
    }

    /// List all users.
    pub async fn list_users(&self) -> AppResult<Relayed<Vec<User>>> {
        let request = self.downstream.get("/users");
        self.downstream.relay(request).await
    }

    pub async fn ping(&self) -> Result<(), DownstreamError> {
        self.downstream.ping().await
    }
}

#[async_trait]
impl UserDirectory for UserClient {
    async fn find_user(&self, id: UserId) -> Lookup<User> {
        self.downstream.lookup(&format!("/users/{}", id)).await
    }
}
