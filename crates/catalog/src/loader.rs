//! Loading a catalog from a local JSON snapshot.
//!
//! The snapshot is the offline fallback for the remote catalog API: either
//! a saved list response (`{ "results": [...] }`) or a bare array of
//! movies. Both shapes decode with the same tolerant field handling as
//! the live API payloads.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The two snapshot shapes accepted on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Page { results: Vec<Movie> },
    Movies(Vec<Movie>),
}

/// Load a catalog from a JSON snapshot file.
///
/// # Arguments
/// * `path` - Path to the snapshot file
///
/// # Returns
/// * `Ok(Catalog)` - Movies in the order the snapshot lists them
/// * `Err` - If the file cannot be read or is not catalog JSON
pub fn load_catalog_json(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let snapshot: Snapshot =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Decode {
            path: path.display().to_string(),
            source,
        })?;

    let movies = match snapshot {
        Snapshot::Page { results } => results,
        Snapshot::Movies(movies) => movies,
    };

    Ok(Catalog::from_movies(movies))
}
