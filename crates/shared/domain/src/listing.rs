//! Listing domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{LISTING_TYPE_RENT, LISTING_TYPE_SALE};
use crate::user::UserId;

/// Store-assigned listing identifier
pub type ListingId = i64;

/// Whether a property is offered for rent or for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => LISTING_TYPE_RENT,
            ListingType::Sale => LISTING_TYPE_SALE,
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing domain entity, owned by the listing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Listing {
    /// Unique listing identifier, assigned on creation
    pub id: ListingId,
    /// Owning user (not checked for existence on write)
    pub user_id: UserId,
    pub listing_type: ListingType,
    /// Non-negative, currency-agnostic price
    pub price: i64,
}

impl Listing {
    /// Build the stored record for a freshly assigned id.
    pub fn new(id: ListingId, input: CreateListing) -> Self {
        Self {
            id,
            user_id: input.user_id,
            listing_type: input.listing_type,
            price: input.price,
        }
    }
}

/// Listing creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(deny_unknown_fields)]
pub struct CreateListing {
    pub user_id: UserId,
    pub listing_type: ListingType,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,
}

/// Filter for listing scans.
///
/// Keys other than `user_id` (e.g. `page_num`, `page_size`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Restrict the scan to listings owned by this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl ListingQuery {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Check whether a listing passes this filter
    pub fn matches(&self, listing: &Listing) -> bool {
        self.user_id.map_or(true, |id| listing.user_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(price: i64) -> CreateListing {
        CreateListing {
            user_id: 1,
            listing_type: ListingType::Rent,
            price,
        }
    }

    #[test]
    fn test_listing_type_wire_format() {
        assert_eq!(serde_json::to_string(&ListingType::Rent).unwrap(), "\"rent\"");
        assert_eq!(
            serde_json::from_str::<ListingType>("\"sale\"").unwrap(),
            ListingType::Sale
        );
        assert!(serde_json::from_str::<ListingType>("\"lease\"").is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        assert!(create(0).validate().is_ok());
        assert!(create(5_000_000).validate().is_ok());
        assert!(create(-1).validate().is_err());
    }

    #[test]
    fn test_create_listing_rejects_unknown_and_missing_fields() {
        let unknown = r#"{"user_id":1,"listing_type":"rent","price":10,"extra":true}"#;
        assert!(serde_json::from_str::<CreateListing>(unknown).is_err());

        let missing = r#"{"user_id":1,"price":10}"#;
        assert!(serde_json::from_str::<CreateListing>(missing).is_err());
    }

    #[test]
    fn test_query_matches_owner() {
        let listing = Listing::new(3, create(100));
        assert!(ListingQuery::default().matches(&listing));
        assert!(ListingQuery::for_user(1).matches(&listing));
        assert!(!ListingQuery::for_user(2).matches(&listing));
    }

    #[test]
    fn test_query_ignores_pagination_keys() {
        let query: ListingQuery =
            serde_json::from_str(r#"{"user_id":3,"page_num":1,"page_size":10}"#).unwrap();
        assert_eq!(query, ListingQuery::for_user(3));
        assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"user_id":3}"#);
    }
}
