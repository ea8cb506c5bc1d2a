//! Selector engine - pure filtering and ordering over the catalog
//!
//! `select` is a pure function from (items, query) to an ordered, filtered
//! list of item references. The three filter predicates are AND-combined;
//! the sort is stable, so items with equal keys keep their catalog order.

use super::query::{QueryState, SortKey};
use crate::Item;
use std::cmp::Ordering;

/// Filter and order the catalog for the given query
///
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn select<'a>(items: &'a [Item], query: &QueryState) -> Vec<&'a Item> {
    let needle = query.search_text.trim().to_lowercase();
    let (lo, hi) = query.year_range;

    let mut matched: Vec<&Item> = items
        .iter()
        .filter(|item| matches_text(item, &needle))
        .filter(|item| matches_tags(item, &query.active_tags))
        .filter(|item| lo <= item.year && item.year <= hi)
        .collect();

    // sort_by is stable; equal keys retain catalog order
    match query.sort_key {
        SortKey::Newest => matched.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Oldest => matched.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::TitleAsc => matched.sort_by(|a, b| compare_titles(a, b)),
        SortKey::TitleDesc => matched.sort_by(|a, b| compare_titles(b, a)),
    }

    matched
}

/// Substring match against title, role, tools, and tags
///
/// The needle is expected pre-trimmed and lowercased. An empty needle
/// matches everything. Plain substring semantics: no tokenization, no
/// fuzzy matching.
fn matches_text(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.role.to_lowercase().contains(needle)
        || item.tools.join(" ").to_lowercase().contains(needle)
        || item.tags.join(" ").to_lowercase().contains(needle)
}

/// Every active tag must be present on the item (ALL semantics)
fn matches_tags(item: &Item, active: &[String]) -> bool {
    active.iter().all(|tag| item.has_tag(tag))
}

/// Case-folded title comparison, raw title as tie-break
fn compare_titles(a: &Item, b: &Item) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
