//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the catalog.

use catalog::Movie;

use crate::criteria::FilterCriteria;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec,
///   so stages chain without cloning
/// - Filtering is total: degenerate inputs (empty collection, blank
///   query) are identity passes, never errors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the collection.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `criteria` - The criteria for this pass
    ///
    /// # Returns
    /// The retained movies, relative order preserved.
    fn apply(&self, movies: Vec<Movie>, criteria: &FilterCriteria) -> Vec<Movie>;
}
