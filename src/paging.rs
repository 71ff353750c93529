//! Pagination utilities

use serde::Serialize;

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub size: usize,

    /// Total number of items
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, size: usize, total: usize) -> Self {
        // Ensure size is at least 1 to avoid division by zero
        let size = size.max(1);
        let page = page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(size) };
        let start = (page - 1).saturating_mul(size);

        Self {
            page,
            size,
            total,
            total_pages,
            has_next: start.saturating_add(size) < total,
            has_prev: page > 1,
        }
    }
}

/// One page of results plus its metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Take one page out of an in-memory collection (skip/take)
pub fn paginate<T>(items: Vec<T>, page: usize, size: usize) -> Page<T> {
    let meta = PageMeta::new(page, size, items.len());
    // Saturate: an absurd client-supplied page must yield an empty page,
    // not an overflow panic.
    let items = items
        .into_iter()
        .skip((meta.page - 1).saturating_mul(meta.size))
        .take(meta.size)
        .collect();
    Page { items, meta }
}
