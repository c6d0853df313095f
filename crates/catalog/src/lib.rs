//! # Catalog Crate
//!
//! Domain types and local loading for the CineVerse movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieDetails, Genre, Catalog)
//! - **loader**: Load a catalog from a local JSON snapshot
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_catalog_json, Catalog};
//! use std::path::Path;
//!
//! // Load a saved catalog page
//! let catalog = load_catalog_json(Path::new("data/movies.json"))?;
//!
//! println!("{} movies in catalog", catalog.len());
//! ```
//!
//! Decoding is tolerant by design: records with missing fields are kept,
//! with absent numbers as zero, absent text as the empty string, and
//! absent dates as `None`. A live API payload and a years-old snapshot
//! decode the same way.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::load_catalog_json;
pub use types::{Catalog, Genre, Movie, MovieDetails, MovieId};
