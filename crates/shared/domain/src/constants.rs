//! Domain-level constants.
//!
//! These constants define business rules and the shared wire contract.

// =============================================================================
// Listing Types
// =============================================================================

/// Listing offered for rent
pub const LISTING_TYPE_RENT: &str = "rent";

/// Listing offered for sale
pub const LISTING_TYPE_SALE: &str = "sale";

// =============================================================================
// Absence Reasons
// =============================================================================

/// Owner lookup reported no such user
pub const REASON_NOT_FOUND: &str = "not_found";

/// Owner lookup failed (timeout, refused connection, bad response)
pub const REASON_UNAVAILABLE: &str = "unavailable";
