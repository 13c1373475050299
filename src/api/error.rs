//! Error types for catalog API calls.

use thiserror::Error;

/// Errors that can occur when calling the catalog API.
///
/// Callers treat every variant the same way (a single attempt failed);
/// the split exists for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, TLS, timeout).
    #[error("Request to '{path}' failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("Request to '{path}' returned status {status}")]
    Status { path: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}
