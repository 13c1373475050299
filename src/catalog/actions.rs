//! Fetch actions that populate the catalog store.

use crate::api::StoreApiClient;
use crate::catalog::state::CatalogStore;

/// Message committed to state when a product fetch fails.
///
/// Fixed and non-descriptive: the UI displays it as-is and the underlying
/// cause goes to the log instead.
pub const PRODUCTS_FETCH_ERROR: &str = "Failed to load products";

/// The catalog actions, bound to a store handle and an API client.
///
/// Both collaborators are injected so tests can point the catalog at a
/// local mock server. Actions never return errors; outcomes land in the
/// store (products) or in the log (categories).
#[derive(Clone)]
pub struct Catalog {
    store: CatalogStore,
    api: StoreApiClient,
}

impl Catalog {
    pub fn new(store: CatalogStore, api: StoreApiClient) -> Self {
        Self { store, api }
    }

    /// Get a handle to the underlying store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Fetch the product listing and commit it to the store.
    ///
    /// Sets `loading` and clears `error` before the request goes out, then
    /// commits exactly one of {new products, fixed error message}. The
    /// loading flag drops back to false on every exit path, including an
    /// unwind out of the commit.
    ///
    /// Overlapping calls are not synchronized; the last one to resolve
    /// determines the final state.
    pub async fn fetch_products(&self) {
        self.store.set_loading(true);
        self.store.set_error(None);

        let store = self.store.clone();
        let _reset_loading = scopeguard::guard((), move |_| store.set_loading(false));

        match self.api.products().await {
            Ok(products) => self.store.set_products(products),
            Err(err) => {
                tracing::warn!(component = "catalog", error = %err, "Product fetch failed");
                self.store.set_error(Some(PRODUCTS_FETCH_ERROR.to_string()));
            }
        }
    }

    /// Fetch the category names and commit them to the store.
    ///
    /// Failures are logged and otherwise ignored: no state field is
    /// touched, so the UI keeps whatever categories it already had.
    pub async fn fetch_categories(&self) {
        match self.api.categories().await {
            Ok(categories) => self.store.set_categories(categories),
            Err(err) => {
                tracing::warn!(component = "catalog", error = %err, "Category fetch failed");
            }
        }
    }
}
