//! Client-side pagination over a fetched list
//!
//! [`PagedList`] owns the items of the last fetch and a zero-based cursor.
//! Replacing the items always moves the cursor back to the first page; the
//! cursor never leaves `0..page_count()` and navigation past either end is a
//! no-op reported through the return value.

use serde::Serialize;

/// Number of holiday entries shown per page
pub const HOLIDAYS_PER_PAGE: usize = 8;

/// An ordered list with a page cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_size: usize,
    page: usize,
}

impl<T> PagedList<T> {
    /// Create an empty list with the given page size (at least 1)
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            page: 0,
        }
    }

    /// Replace every item and reset the cursor to the first page
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 0;
    }

    /// Drop every item and reset the cursor
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Zero-based index of the current page
    pub const fn current_page(&self) -> usize {
        self.page
    }

    /// Total number of pages; zero for an empty list
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Items on the current page
    pub fn page_items(&self) -> &[T] {
        let start = (self.page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Whether a following page exists
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Whether a preceding page exists
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Advance one page; returns `false` (and stays put) on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page; returns `false` (and stays put) on the first page
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }
}

impl<T: Clone> PagedList<T> {
    /// Snapshot of the current page for rendering
    pub fn view(&self) -> PageView<T> {
        let total_pages = self.page_count();
        PageView {
            items: self.page_items().to_vec(),
            page: self.page,
            total_pages,
            total_items: self.items.len(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            show_controls: total_pages > 1,
        }
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new(HOLIDAYS_PER_PAGE)
    }
}

/// Rendered state of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Zero-based page index
    pub page: usize,
    /// Number of pages
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
    /// "Previous" control enabled
    pub has_previous: bool,
    /// "Next" control enabled
    pub has_next: bool,
    /// Navigation controls are shown at all
    pub show_controls: bool,
}
