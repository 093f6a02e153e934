//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The stores own `User` and `Listing`; the gateway only ever builds
//! `AggregatedListing` values on the fly.

pub mod aggregate;
pub mod constants;
pub mod error;
pub mod listing;
pub mod user;

pub use aggregate::{AbsenceReason, AggregatedListing};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use listing::{CreateListing, Listing, ListingId, ListingQuery, ListingType};
pub use user::{CreateUser, User, UserId};
