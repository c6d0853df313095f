//! Error types for catalog API access.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API.
///
/// Failures are reported to the caller as-is; the client never retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        /// The endpoint path that was requested
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("Catalog API returned {status} for {endpoint}")]
    Status {
        /// The endpoint path that was requested
        endpoint: String,
        /// The HTTP status the API returned
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// The endpoint path that was requested
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
