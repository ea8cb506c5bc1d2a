//! Catalog of portfolio items and derived facts
//!
//! The catalog is built once at startup from the loaded item list and never
//! mutates afterwards. Derived facts (distinct tags, tag census, year
//! bounds) are computed at construction so reads are allocation-free.

mod error;
mod loader;

pub use error::CatalogError;
pub use loader::load_items;

use crate::Item;
use std::collections::BTreeMap;

/// The immutable item collection plus its derived aggregate facts
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    tag_census: Vec<(String, usize)>,
    year_bounds: (i32, i32),
}

impl Catalog {
    /// Build a catalog from the loaded item list
    ///
    /// An empty list is valid; its year bounds are the `(0, 0)` sentinel.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        // BTreeMap keeps the census in lexicographic tag order. An item
        // carrying the same tag twice still counts once.
        let mut census: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &items {
            let mut seen: Vec<&str> = Vec::new();
            for tag in &item.tags {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag);
                    *census.entry(tag).or_insert(0) += 1;
                }
            }
        }
        let tag_census: Vec<(String, usize)> = census
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();

        let year_bounds = items
            .iter()
            .map(|item| item.year)
            .fold(None, |bounds, year| match bounds {
                None => Some((year, year)),
                Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
            })
            .unwrap_or((0, 0));

        Self {
            items,
            tag_census,
            year_bounds,
        }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct tags across all items, lexicographically sorted
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        self.tag_census.iter().map(|(tag, _)| tag.as_str()).collect()
    }

    /// Distinct tags with the number of items carrying each, sorted by tag
    #[must_use]
    pub fn tag_census(&self) -> &[(String, usize)] {
        &self.tag_census
    }

    /// Minimum and maximum item year; `(0, 0)` for an empty catalog
    #[must_use]
    pub const fn year_bounds(&self) -> (i32, i32) {
        self.year_bounds
    }
}
