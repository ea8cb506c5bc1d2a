//! Data file loading
//!
//! The portfolio is a JSON array of items, read once at startup. Loading is
//! the only fallible step in the catalog's lifecycle; everything after
//! construction is infallible reads.

use super::CatalogError;
use crate::Item;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load and validate the item list from a JSON data file
///
/// Validation rejects duplicate ids. Items with empty `tools`, `tags`, or
/// `images` arrays are accepted; the renderer substitutes a placeholder
/// frame for imageless items.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, is not a valid item
/// array, or contains duplicate ids.
pub fn load_items(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }

    Ok(items)
}
