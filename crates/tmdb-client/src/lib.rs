//! # TMDB Client Crate
//!
//! HTTP client for the remote movie catalog: the source that populates a
//! session's [`catalog::Catalog`].
//!
//! ## Components
//!
//! - **client**: `TmdbClient` with the popular, details, and search endpoints
//! - **config**: endpoints, API key, language, and image sizing
//! - **format**: display formatting for dates and runtimes
//! - **error**: error types for API access
//!
//! ## Example Usage
//!
//! ```ignore
//! use tmdb_client::TmdbClient;
//!
//! let client = TmdbClient::new(); // API key from TMDB_API_KEY
//! let page = client.popular_movies(1).await?;
//! let details = client.movie_details(page.results[0].id).await?;
//! ```
//!
//! Retrieval failures come back as [`ClientError`] and are never retried
//! here; what to do about a failed load is the caller's call.

pub mod client;
pub mod config;
pub mod error;
pub mod format;

// Re-export commonly used types
pub use client::{MovieListPage, TmdbClient};
pub use config::{ClientConfig, ImageSize};
pub use error::ClientError;
pub use format::{format_release_date, format_runtime};
