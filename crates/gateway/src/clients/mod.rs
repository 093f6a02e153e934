//! HTTP clients for calling the downstream stores.

mod downstream;
mod listing_client;
mod user_client;

pub use downstream::{Downstream, DownstreamError, Lookup, Relayed};
pub use listing_client::ListingClient;
pub use user_client::UserClient;
