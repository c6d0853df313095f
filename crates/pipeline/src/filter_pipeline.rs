//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, and the composed
//! [`apply_filters_and_sort`] entry point used on every input event.

use catalog::Movie;
use tracing;

use crate::criteria::FilterCriteria;
use crate::filters::SearchFilter;
use crate::sort::sort_movies;
use crate::traits::Filter;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new().add_filter(SearchFilter);
///
/// let filtered = pipeline.apply(movies, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the collection.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter
    /// * `criteria` - The criteria for this pass
    ///
    /// # Returns
    /// The movies retained by every stage, input order preserved.
    pub fn apply(&self, movies: Vec<Movie>, criteria: &FilterCriteria) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter the collection by the criteria's query, then sort the result
/// by its sort key.
///
/// The order is fixed: filtering always runs before sorting, so the sort
/// only pays for the movies that survived. Applying the same criteria a
/// second time changes nothing.
pub fn apply_filters_and_sort(movies: Vec<Movie>, criteria: &FilterCriteria) -> Vec<Movie> {
    let pipeline = FilterPipeline::new().add_filter(SearchFilter);
    let filtered = pipeline.apply(movies, criteria);
    sort_movies(filtered, criteria.sort_key)
}
