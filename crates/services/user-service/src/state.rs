//! Application state for dependency injection.

use std::sync::Arc;

use crate::repository::{UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// State backed by the given storage handle.
    pub fn with_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(repo)))
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(UserStore::new()))
    }
}
