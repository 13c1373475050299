//! Shared test utilities and the mock catalog API.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use bookingtogo::api::StoreApiClient;
use bookingtogo::catalog::{Catalog, CatalogStore};
use bookingtogo::config::ApiConfig;

/// API config pointed at a test server, with short timeouts.
pub fn test_api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

/// Build a catalog wired to the given base URL, plus its store handle.
pub fn test_catalog(base_url: &str) -> (Catalog, CatalogStore) {
    let store = CatalogStore::new();
    let api = StoreApiClient::new(&test_api_config(base_url));
    (Catalog::new(store.clone(), api), store)
}
