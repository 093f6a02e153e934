//! Composite listing view assembled by the gateway.
//!
//! Never persisted: built per request from one listing scan and the owner
//! lookups that followed it.

use serde::{Deserialize, Serialize};

use crate::constants::{REASON_NOT_FOUND, REASON_UNAVAILABLE};
use crate::listing::Listing;
use crate::user::User;

/// Why an owner could not be embedded in an aggregated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AbsenceReason {
    /// The user store has no such user
    NotFound,
    /// The user store could not answer in time or answered garbage
    Unavailable,
}

impl AbsenceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbsenceReason::NotFound => REASON_NOT_FOUND,
            AbsenceReason::Unavailable => REASON_UNAVAILABLE,
        }
    }
}

impl std::fmt::Display for AbsenceReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing with its owner embedded, or an explicit absence marker.
///
/// Exactly one of `user` and `reason` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AggregatedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<AbsenceReason>,
}

impl AggregatedListing {
    /// Listing whose owner was found.
    pub fn joined(listing: Listing, user: User) -> Self {
        Self {
            listing,
            user: Some(user),
            reason: None,
        }
    }

    /// Listing whose owner lookup failed.
    pub fn absent(listing: Listing, reason: AbsenceReason) -> Self {
        Self {
            listing,
            user: None,
            reason: Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.user.is_none()
    }
}
