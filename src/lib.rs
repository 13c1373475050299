//! Catalog store and API client for the BookingToGo travel storefront.
//!
//! The storefront UI is an external consumer of this crate: it holds a
//! [`catalog::CatalogStore`] handle for reads and dispatches the actions on
//! [`catalog::Catalog`] to populate the state from the remote store API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
