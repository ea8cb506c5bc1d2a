//! Page derivation for the filtered item list
//!
//! A `PageView` is a pure value computed from the filtered count, the page
//! size, and the requested page. Out-of-range requests clamp instead of
//! erroring, so every query state maps to a displayable page.

use std::ops::Range;

/// The resolved page window over a filtered result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// Clamped current page, 1-based
    pub page: usize,
    /// Total pages, at least 1 even for an empty result
    pub total_pages: usize,
    /// Start index of the visible slice (inclusive)
    pub start: usize,
    /// End index of the visible slice (exclusive)
    pub end: usize,
}

impl PageView {
    /// Resolve the visible window
    ///
    /// `total_pages = max(1, ceil(filtered_count / page_size))`; the
    /// requested page clamps into `[1, total_pages]` and the slice bounds
    /// clamp to the item count. A zero page size is treated as 1.
    #[must_use]
    pub fn compute(filtered_count: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = filtered_count.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);

        let start = ((page - 1) * page_size).min(filtered_count);
        let end = (page * page_size).min(filtered_count);

        Self {
            page,
            total_pages,
            start,
            end,
        }
    }

    /// Index range of the visible slice
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of items on this page
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this page holds no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the previous-page control should be disabled
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Whether the next-page control should be disabled
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page == self.total_pages
    }
}
