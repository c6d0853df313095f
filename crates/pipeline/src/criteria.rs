//! Filter criteria driving a filter/sort pass.
//!
//! A `FilterCriteria` is transient: the input layer builds a fresh one for
//! every qualifying event and hands it to the pipeline. Nothing here is
//! persisted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How to order a filtered collection.
///
/// Unrecognized keys parse as [`SortKey::None`], which preserves the
/// input order. A bad key is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by popularity score
    Popularity,
    /// Descending by vote average
    Rating,
    /// Descending by release date, most recent first
    Date,
    /// Ascending by title, case-insensitive
    Title,
    /// Keep the input order unchanged
    #[default]
    None,
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "popularity" => SortKey::Popularity,
            "rating" => SortKey::Rating,
            "date" => SortKey::Date,
            "title" => SortKey::Title,
            _ => SortKey::None,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Date => "date",
            SortKey::Title => "title",
            SortKey::None => "none",
        };
        f.write_str(name)
    }
}

/// The pair of inputs driving one filter/sort pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Free-text query matched against title and overview
    pub query: String,
    /// Ordering applied after filtering
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            query: query.into(),
            sort_key,
        }
    }
}
