use serde::Serialize;

/// Notices shown per page, mirroring the API's `size` parameter.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// A page of items plus the state the pagination controls need.
///
/// Pages are 0-indexed. Bounds are not clamped here; the prev/next
/// controls are disabled at the edges instead, and `prev_page` /
/// `next_page` are only meaningful when the matching control is enabled.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: usize,
    pub next_page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);

        Self {
            has_prev: page > 0,
            has_next: page + 1 < total_pages,
            prev_page: page.saturating_sub(1),
            next_page: page + 1,
            items,
            page,
            total_pages,
        }
    }
}
