//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading a catalog snapshot.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading a snapshot file
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot contents were not valid catalog JSON
    #[error("Invalid snapshot {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
