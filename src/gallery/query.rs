//! Query state for the gallery session
//!
//! `QueryState` is the single source of truth for every user-adjustable
//! filter and the current page. Mutators enforce two invariants: the year
//! range never stores `lo > hi`, and any filter or sort change resets the
//! page to 1. The Display impl renders the state as an equivalent CLI
//! invocation for the TUI status bar.

use std::fmt;

/// Result ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by year
    #[default]
    Newest,
    /// Ascending by year
    Oldest,
    /// Ascending by case-folded title
    TitleAsc,
    /// Descending by case-folded title
    TitleDesc,
}

impl SortKey {
    /// Get description for UI
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Newest => "newest first",
            Self::Oldest => "oldest first",
            Self::TitleAsc => "title A-Z",
            Self::TitleDesc => "title Z-A",
        }
    }

    /// Advance to the next key, wrapping around
    pub const fn cycle(&mut self) {
        *self = match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::TitleAsc,
            Self::TitleAsc => Self::TitleDesc,
            Self::TitleDesc => Self::Newest,
        };
    }

    /// CLI value as accepted by `folio list --sort`
    #[must_use]
    pub const fn as_cli_value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }
}

/// Live filter, sort, and page state for a gallery session
///
/// Fields are public for direct reads (idiomatic here, as in the rest of
/// the state layer); writes should go through the mutators so the
/// page-reset policy holds.
#[derive(Debug, Clone)]
pub struct QueryState {
    /// Free-text filter; trimmed and case-folded at match time
    pub search_text: String,
    /// Active tag filters in toggle order (AND semantics)
    pub active_tags: Vec<String>,
    /// Inclusive year window, always `lo <= hi`
    pub year_range: (i32, i32),
    /// Result ordering
    pub sort_key: SortKey,
    /// Current page, 1-based
    pub page: usize,
    /// Catalog year bounds, kept for `reset_filters` and default detection
    default_year_range: (i32, i32),
}

impl QueryState {
    /// Create the default query for a catalog with the given year bounds
    #[must_use]
    pub fn new(year_bounds: (i32, i32)) -> Self {
        Self {
            search_text: String::new(),
            active_tags: Vec::new(),
            year_range: year_bounds,
            sort_key: SortKey::default(),
            page: 1,
            default_year_range: year_bounds,
        }
    }

    /// Replace the search text; resets the page
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Toggle a tag filter; resets the page
    ///
    /// Returns true if the tag was activated, false if deactivated.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.page = 1;
        if let Some(pos) = self.active_tags.iter().position(|t| t == tag) {
            self.active_tags.remove(pos);
            false
        } else {
            self.active_tags.push(tag.to_string());
            true
        }
    }

    /// Check if a tag filter is active
    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// Set the year window; resets the page
    ///
    /// An inverted range (`lo > hi`) is rejected: the prior range is
    /// retained, the page untouched, and false returned.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) -> bool {
        if lo > hi {
            return false;
        }
        self.year_range = (lo, hi);
        self.page = 1;
        true
    }

    /// Set the sort key; resets the page
    pub const fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page = 1;
    }

    /// Clear active tags and restore the catalog year bounds; resets the
    /// page. Search text and sort key are untouched.
    pub fn reset_filters(&mut self) {
        self.active_tags.clear();
        self.year_range = self.default_year_range;
        self.page = 1;
    }

    /// Check whether any filter deviates from its default
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty()
            || !self.active_tags.is_empty()
            || self.year_range != self.default_year_range
    }
}

impl fmt::Display for QueryState {
    /// Generate CLI-style preview
    ///
    /// Example: `folio list -t web -t backend --query flask --sort oldest`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folio list")?;

        for tag in &self.active_tags {
            write!(f, " -t ")?;
            if needs_quoting(tag) {
                write!(f, "\"{tag}\"")?;
            } else {
                write!(f, "{tag}")?;
            }
        }

        let query = self.search_text.trim();
        if !query.is_empty() {
            write!(f, " --query ")?;
            if needs_quoting(query) {
                write!(f, "\"{query}\"")?;
            } else {
                write!(f, "{query}")?;
            }
        }

        if self.year_range != self.default_year_range {
            let (lo, hi) = self.year_range;
            write!(f, " --from {lo} --until {hi}")?;
        }

        if self.sort_key != SortKey::default() {
            write!(f, " --sort {}", self.sort_key.as_cli_value())?;
        }

        if self.page > 1 {
            write!(f, " --page {}", self.page)?;
        }

        Ok(())
    }
}

/// Check if a string needs quoting in shell context
fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| {
        c.is_whitespace()
            || matches!(
                c,
                '$' | '"' | '\'' | '\\' | '&' | '|' | ';' | '(' | ')' | '<' | '>'
            )
    })
}
