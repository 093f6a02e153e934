//! HTTP handlers for the public API.

pub mod health_handler;
pub mod listing_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use listing_handler::listing_routes;
pub use user_handler::user_routes;
