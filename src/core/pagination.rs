//! Fixed-size pagination over ordered results.
//!
//! [`PageState`] is the navigation state machine: it only ever holds a
//! valid page index, and every navigation call clamps instead of failing.
//! [`page`] slices a result list for a given index.

use serde::Serialize;

/// Results per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Number of pages for `total` items; never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of results
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 0-based, already clamped
    pub page_index: usize,
    pub page_count: usize,
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<'_, T> {
    /// `Page X of Y`, 1-based
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }
}

/// Slice `results` into the page at `page_index`.
///
/// Out-of-range indices clamp to the last page.
///
/// # Examples
///
/// ```
/// use docsift::core::pagination::page;
///
/// let results: Vec<u32> = (0..30).collect();
/// let last = page(&results, 5, 12);
/// assert_eq!(last.page_index, 2);
/// assert_eq!(last.items.len(), 6);
/// assert!(!last.has_next);
/// ```
pub fn page<T>(results: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = results.len();
    let count = page_count(total, page_size);
    let index = page_index.min(count - 1);

    let start = (index * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        items: &results[start..end],
        page_index: index,
        page_count: count,
        total,
        has_prev: index > 0,
        has_next: (index + 1) * page_size < total,
    }
}

/// Current page index and the fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// A zero page size is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page (new search)
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Jump to `index`, clamped into `[0, page_count - 1]`
    pub fn go_to(&mut self, index: usize, total: usize) -> usize {
        let last = page_count(total, self.page_size) - 1;
        self.page_index = index.min(last);
        self.page_index
    }

    pub fn next(&mut self, total: usize) -> usize {
        self.go_to(self.page_index.saturating_add(1), total)
    }

    pub fn prev(&mut self, total: usize) -> usize {
        self.go_to(self.page_index.saturating_sub(1), total)
    }

    /// Slice `results` at the current page
    pub fn page<'a, T>(&self, results: &'a [T]) -> Page<'a, T> {
        page(results, self.page_index, self.page_size)
    }
}
