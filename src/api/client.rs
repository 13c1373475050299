use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::catalog::Product;
use crate::config::ApiConfig;

const PRODUCTS_PATH: &str = "/products";
const CATEGORIES_PATH: &str = "/products/categories";

/// Client for the storefront catalog API.
///
/// Wraps a [`reqwest::Client`] configured from [`ApiConfig`]. Cheap to
/// clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StoreApiClient {
    client: Client,
    base_url: String,
}

impl StoreApiClient {
    /// Build a client from validated configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .expect("Failed to build catalog API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full product listing, in API response order.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(PRODUCTS_PATH).await
    }

    /// Fetch the category names.
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                path: path.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            path: path.to_string(),
            source: e,
        })
    }
}
