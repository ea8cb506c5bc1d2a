//! Folio - a portfolio gallery browser for the terminal
//!
//! This library provides the state machine behind the gallery: an immutable
//! catalog of portfolio items plus the query, paging, and detail-view state
//! that the CLI and TUI front-ends render.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FolioError {
    /// Catalog error (data file loading or validation)
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single portfolio entry as supplied by the data file
///
/// Items are pure data: the filtering and ordering logic lives in
/// [`gallery::selector`], which reads these fields directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Unique key within the catalog
    pub id: String,
    /// Display title
    pub title: String,
    /// Completion year
    pub year: i32,
    /// Role held on the project
    #[serde(default)]
    pub role: String,
    /// Short blurb shown in the detail view
    #[serde(default)]
    pub summary: String,
    /// Tools used, in display order
    #[serde(default)]
    pub tools: Vec<String>,
    /// Tags; membership drives filtering, order drives chip display
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image references, in carousel order (may be empty; the renderer
    /// substitutes a placeholder frame)
    #[serde(default)]
    pub images: Vec<String>,
}

impl Item {
    /// Create a new Item with the required fields; the rest default to empty
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            role: String::new(),
            summary: String::new(),
            tools: Vec::new(),
            tags: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Check whether the item carries a tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
