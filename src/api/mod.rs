mod api_error;
mod client;

pub use api_error::FetchError;
pub use client::{HttpListingClient, ListingApi};
