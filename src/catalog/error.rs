//! Catalog-specific error types
//!
//! Failures loading or validating the portfolio data file. The catalog
//! itself has no fallible operations once built.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the portfolio data file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("Failed to read data file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data file is not a valid item array
    #[error("Failed to parse data file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two items share the same id
    #[error("Duplicate item id '{0}' in data file")]
    DuplicateId(String),
}
