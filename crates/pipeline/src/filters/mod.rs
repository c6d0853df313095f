//! Filter implementations for the catalog pipeline.
//!
//! This module contains the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod search;

// Re-export for convenience
pub use search::{SearchFilter, filter_by_search};
