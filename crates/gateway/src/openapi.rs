//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{AbsenceReason, AggregatedListing, CreateListing, CreateUser, Listing, ListingType, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::listing_handler::list_listings,
        crate::handlers::listing_handler::create_listing,
        crate::handlers::listing_handler::get_listing,
    ),
    components(
        schemas(
            User,
            CreateUser,
            Listing,
            CreateListing,
            ListingType,
            AggregatedListing,
            AbsenceReason,
        )
    ),
    tags(
        (name = "Users", description = "User store pass-through"),
        (name = "Listings", description = "Listing feed with embedded owners"),
    )
)]
pub struct ApiDoc;
