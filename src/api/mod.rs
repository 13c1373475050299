//! HTTP client for the remote storefront catalog API.

mod client;
mod error;

pub use client::StoreApiClient;
pub use error::ApiError;
