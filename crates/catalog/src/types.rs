//! Core domain types for the movie catalog.
//!
//! This module defines the data structures shared by the whole workspace.
//! Decoding is deliberately tolerant: catalog payloads in the wild omit
//! fields all the time, so absent numbers decode as zero, absent text as
//! the empty string, and absent or blank dates as `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, as assigned by the catalog API.
pub type MovieId = u64;

// =============================================================================
// Movie Types
// =============================================================================

/// A single catalog entry, as returned in list responses.
///
/// The `id` field identifies the movie for detail lookups but plays no
/// role in filtering or sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    /// Release date in `YYYY-MM-DD` form. The API sends an empty string
    /// for unreleased or unknown dates; both decode as `None`.
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Create a movie with the given id and title, all other fields at
    /// their decoded-absent defaults. Mostly useful in tests and fixtures.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            poster_path: None,
        }
    }

    /// Release year, when the release date is known.
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|date| date.year())
    }
}

/// A genre tag attached to a movie in detail responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Full record for a single movie, as returned by the details endpoint.
///
/// Everything in [`Movie`] plus the fields the details page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    /// Runtime in minutes; absent for movies without one on record.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

// =============================================================================
// Catalog - The Owned Collection
// =============================================================================

/// An ordered collection of movies, owned by whoever drives a session.
///
/// The catalog is populated once (from the API or a local snapshot) and
/// then only read: the filter pipeline produces new orderings and never
/// mutates the collection it was given.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Wraps an already-loaded list of movies, preserving its order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All movies, in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Append a movie to the end of the catalog.
    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// Tolerant Field Decoding
// =============================================================================

/// Decode a release date from an optional `YYYY-MM-DD` string.
///
/// Empty strings and unparseable values both decode as `None` rather
/// than failing the whole record.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_decodes_with_all_fields() {
        let payload = r#"{
            "id": 438631,
            "title": "Dune",
            "overview": "Paul Atreides leads nomadic tribes in a desert war.",
            "popularity": 438.6,
            "vote_average": 7.8,
            "vote_count": 11859,
            "release_date": "2021-09-15",
            "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
        }"#;

        let movie: Movie = serde_json::from_str(payload).unwrap();
        assert_eq!(movie.id, 438631);
        assert_eq!(movie.title, "Dune");
        assert_eq!(
            movie.release_date,
            NaiveDate::from_ymd_opt(2021, 9, 15)
        );
        assert_eq!(movie.year(), Some(2021));
    }

    #[test]
    fn test_movie_decodes_with_missing_fields() {
        // Only an id: every other field falls back to its absent default.
        let movie: Movie = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "");
        assert_eq!(movie.overview, "");
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn test_blank_release_date_decodes_as_none() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 1, "release_date": ""}"#).unwrap();
        assert_eq!(movie.release_date, None);

        let movie: Movie =
            serde_json::from_str(r#"{"id": 2, "release_date": "not-a-date"}"#).unwrap();
        assert_eq!(movie.release_date, None);

        let movie: Movie =
            serde_json::from_str(r#"{"id": 3, "release_date": null}"#).unwrap();
        assert_eq!(movie.release_date, None);
    }

    #[test]
    fn test_details_decode() {
        let payload = r#"{
            "id": 438631,
            "title": "Dune",
            "tagline": "It begins.",
            "runtime": 155,
            "genres": [
                {"id": 878, "name": "Science Fiction"},
                {"id": 12, "name": "Adventure"}
            ],
            "release_date": "2021-09-15"
        }"#;

        let details: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(details.tagline, "It begins.");
        assert_eq!(details.runtime, Some(155));
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.genres[0].name, "Science Fiction");
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.push(Movie::new(1, "Alpha"));
        catalog.push(Movie::new(2, "Beta"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).map(|m| m.title.as_str()), Some("Beta"));
        assert!(catalog.get(99).is_none());
    }
}
