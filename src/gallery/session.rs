//! Gallery session - the facade the rendering collaborators consume
//!
//! A `GallerySession` owns the catalog, the query state, and the detail
//! session for one view instance. Every accessor the front-ends read and
//! every mutator they call lives here; derived values (filtered list, page
//! window) are recomputed on each read, so there is no cache to go stale.

use crate::Item;
use crate::catalog::Catalog;
use crate::gallery::detail::DetailSession;
use crate::gallery::pager::PageView;
use crate::gallery::query::{QueryState, SortKey};
use crate::gallery::selector;

/// One user's gallery view over a catalog
#[derive(Debug, Clone)]
pub struct GallerySession {
    catalog: Catalog,
    query: QueryState,
    detail: DetailSession,
    page_size: usize,
}

impl GallerySession {
    /// Create a session with default query state
    ///
    /// A zero `page_size` is lifted to 1 (config validation rejects it
    /// earlier on the CLI path).
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let query = QueryState::new(catalog.year_bounds());
        Self {
            catalog,
            query,
            detail: DetailSession::new(),
            page_size: page_size.max(1),
        }
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The underlying catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current query state
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// The detail-session state
    #[must_use]
    pub const fn detail(&self) -> &DetailSession {
        &self.detail
    }

    /// Configured page size
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Distinct catalog tags, sorted
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        self.catalog.all_tags()
    }

    /// Catalog year bounds
    #[must_use]
    pub const fn year_bounds(&self) -> (i32, i32) {
        self.catalog.year_bounds()
    }

    /// The full filtered, ordered result list
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        selector::select(self.catalog.items(), &self.query)
    }

    /// Number of items matching the current query
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered_items().len()
    }

    /// The resolved page window over the filtered list
    #[must_use]
    pub fn page_view(&self) -> PageView {
        PageView::compute(self.filtered_count(), self.page_size, self.query.page)
    }

    /// Items on the current page
    #[must_use]
    pub fn current_page_items(&self) -> Vec<&Item> {
        let filtered = self.filtered_items();
        let view = PageView::compute(filtered.len(), self.page_size, self.query.page);
        filtered[view.range()].to_vec()
    }

    /// Total pages for the current query (at least 1)
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page_view().total_pages
    }

    /// Current page, clamped into range
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page_view().page
    }

    /// The item open in the detail view, if any
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.detail
            .selected_item_id()
            .and_then(|id| self.catalog.get(id))
    }

    // ------------------------------------------------------------------
    // Query mutators (filter/sort changes reset the page via QueryState)
    // ------------------------------------------------------------------

    /// Replace the search text
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
    }

    /// Toggle a tag filter; returns true if the tag is now active
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.query.toggle_tag(tag)
    }

    /// Set the year window; inverted ranges are rejected
    pub fn set_year_range(&mut self, lo: i32, hi: i32) -> bool {
        self.query.set_year_range(lo, hi)
    }

    /// Set the sort key
    pub const fn set_sort_key(&mut self, key: SortKey) {
        self.query.set_sort_key(key);
    }

    /// Clear tag and year filters, keeping search text and sort key
    pub fn reset_filters(&mut self) {
        self.query.reset_filters();
    }

    // ------------------------------------------------------------------
    // Page mutators (page-only changes leave the rest of the query alone)
    // ------------------------------------------------------------------

    /// Jump to a page; out-of-range values clamp into `[1, total_pages]`
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.query.page = page.clamp(1, total);
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        let view = self.page_view();
        if !view.is_last() {
            self.query.page = view.page + 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) {
        let view = self.page_view();
        if !view.is_first() {
            self.query.page = view.page - 1;
        }
    }

    // ------------------------------------------------------------------
    // Detail mutators
    // ------------------------------------------------------------------

    /// Open the detail view for an item
    ///
    /// Unknown ids are rejected silently (no mutation, false returned);
    /// the front-ends only pass ids they read from the session.
    pub fn open_detail(&mut self, item_id: &str) -> bool {
        if self.catalog.get(item_id).is_none() {
            return false;
        }
        self.detail.open(item_id);
        true
    }

    /// Close the detail view
    pub const fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Jump the carousel to an image of the selected item
    pub fn set_active_image(&mut self, index: usize) -> bool {
        let count = self.selected_image_count();
        self.detail.set_active_image(index, count)
    }

    /// Step the carousel forward
    pub fn next_image(&mut self) -> bool {
        let count = self.selected_image_count();
        self.detail.next_image(count)
    }

    /// Step the carousel back
    pub fn prev_image(&mut self) -> bool {
        let count = self.selected_image_count();
        self.detail.prev_image(count)
    }

    fn selected_image_count(&self) -> usize {
        self.selected_item().map_or(0, |item| item.images.len())
    }
}
