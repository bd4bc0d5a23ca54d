//! Catalog-specific error types
//!
//! Errors raised while reading and decoding the project data file. Loading is
//! never fatal for the front ends: callers that want the degraded behavior use
//! [`Catalog::load_or_empty`](super::Catalog::load_or_empty), which logs the
//! error and continues with an empty working set.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("Failed to read project data '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of project records
    #[error("Failed to parse project data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
