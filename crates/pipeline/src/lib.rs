//! Pipeline for filtering and sorting the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for catalog filtering
//! - FilterPipeline for composing filters
//! - Sort orderings keyed by popularity, rating, date, or title
//! - The composed filter-then-sort entry point
//!
//! ## Architecture
//! Every input event runs the same two stages over the caller's catalog:
//! 1. Filters retain the movies matching the free-text query
//! 2. The surviving movies are reordered by the requested sort key
//!
//! Both stages are pure: they consume a Vec and produce a new one, the
//! owned catalog is never mutated, and no well-typed input is an error.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, SortKey, apply_filters_and_sort};
//!
//! let criteria = FilterCriteria::new("dune", SortKey::Rating);
//! let view = apply_filters_and_sort(catalog.movies().to_vec(), &criteria);
//!
//! println!("{} matches", view.len());
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::{FilterCriteria, SortKey};
pub use filter_pipeline::{FilterPipeline, apply_filters_and_sort};
pub use filters::{SearchFilter, filter_by_search};
pub use sort::sort_movies;
pub use traits::Filter;
