//! Free-text filter over title and overview.
//!
//! This is the filter behind the search box: a trimmed, lowercased query
//! retained as a plain substring match. No tokenization, no fuzzy
//! matching, no ranking.

use catalog::Movie;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Retain every movie whose title or overview contains the query.
///
/// ## Algorithm
/// 1. Trim the query; if nothing remains, return the input unchanged
/// 2. Lowercase the trimmed query
/// 3. Keep movies whose lowercased title OR overview contains it
///
/// The pass is stable: retained movies keep their relative order.
pub fn filter_by_search(movies: Vec<Movie>, query: &str) -> Vec<Movie> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return movies;
    }

    let needle = trimmed.to_lowercase();

    movies
        .into_iter()
        .filter(|movie| {
            movie.title.to_lowercase().contains(&needle)
                || movie.overview.to_lowercase().contains(&needle)
        })
        .collect()
}

/// [`Filter`] stage form of [`filter_by_search`], reading the query from
/// the pass criteria.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, movies: Vec<Movie>, criteria: &FilterCriteria) -> Vec<Movie> {
        filter_by_search(movies, &criteria.query)
    }
}
