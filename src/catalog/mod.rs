//! Catalog state and the actions that populate it.
//!
//! [`CatalogStore`] owns the session's catalog state; [`Catalog`] wires the
//! store to an injected API client and exposes the two fetch actions the
//! storefront dispatches.

mod actions;
mod state;

pub use actions::{Catalog, PRODUCTS_FETCH_ERROR};
pub use state::{CatalogState, CatalogStore, Product};
