//! Session-scoped catalog state container.

use std::sync::{Arc, RwLock};

/// A single catalog entry as returned by the store API.
///
/// The shape is owned by the remote API; entries pass through this crate
/// verbatim, with no validation or projection. Consumers pick out the
/// fields they need.
pub type Product = serde_json::Value;

/// In-memory catalog state for one storefront session.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Product listing, in API response order.
    pub products: Vec<Product>,
    /// Category names, in API response order.
    pub categories: Vec<String>,
    /// True strictly while a product fetch is in flight.
    pub loading: bool,
    /// Set when the last product fetch failed; cleared when a new one starts.
    pub error: Option<String>,
}

/// Shared handle to the session's catalog state.
///
/// Uses a read-write lock pattern: many concurrent readers can observe the
/// state while writes are exclusive. Clones share one underlying state;
/// consumers mutate only through the named setters, one field at a time.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogState>>,
}

impl CatalogStore {
    /// Create a store with empty products/categories, not loading, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a consistent copy of the whole state under one lock acquisition.
    pub fn snapshot(&self) -> CatalogState {
        self.inner
            .read()
            .expect("catalog state lock poisoned")
            .clone()
    }

    /// Get a copy of the current product listing.
    pub fn products(&self) -> Vec<Product> {
        self.inner
            .read()
            .expect("catalog state lock poisoned")
            .products
            .clone()
    }

    /// Get a copy of the current category names.
    pub fn categories(&self) -> Vec<String> {
        self.inner
            .read()
            .expect("catalog state lock poisoned")
            .categories
            .clone()
    }

    /// Whether a product fetch is currently in flight.
    pub fn loading(&self) -> bool {
        self.inner
            .read()
            .expect("catalog state lock poisoned")
            .loading
    }

    /// The error from the last failed product fetch, if any.
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .expect("catalog state lock poisoned")
            .error
            .clone()
    }

    /// Replace the product listing wholesale.
    pub fn set_products(&self, products: Vec<Product>) {
        self.inner
            .write()
            .expect("catalog state lock poisoned")
            .products = products;
    }

    /// Replace the category names wholesale.
    pub fn set_categories(&self, categories: Vec<String>) {
        self.inner
            .write()
            .expect("catalog state lock poisoned")
            .categories = categories;
    }

    /// Replace the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.inner
            .write()
            .expect("catalog state lock poisoned")
            .loading = loading;
    }

    /// Replace the error slot (`None` clears it).
    pub fn set_error(&self, error: Option<String>) {
        self.inner.write().expect("catalog state lock poisoned").error = error;
    }
}
