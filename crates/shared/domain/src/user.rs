//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store-assigned user identifier
pub type UserId = i64;

/// User domain entity, owned by the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier, assigned on creation
    pub id: UserId,
    /// User display name
    pub name: String,
}

impl User {
    /// Build the stored record for a freshly assigned id.
    pub fn new(id: UserId, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
        }
    }
}

/// User creation payload.
///
/// Unknown fields are rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
