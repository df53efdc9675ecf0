//! Offset pagination over an in-memory, already-filtered sequence.
//!
//! # Usage
//!
//! ```rust
//! use upthrift_core::common::paginate;
//!
//! let items: Vec<u32> = (1..=40).collect();
//! let page = paginate(&items, 3, 16);
//! assert_eq!(page.items, (33..=40).collect::<Vec<_>>());
//! assert_eq!(page.total_pages, 3);
//! assert!(!page.has_next_page());
//! ```

use serde::Serialize;

/// Number of listings per feed page.
pub const DEFAULT_PAGE_SIZE: usize = 16;

// ============================================================================
// Page
// ============================================================================

/// One fixed-size slice of a sequence plus the information the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page, in original order.
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    /// Always at least 1, even when there are no items.
    pub total_pages: usize,
    /// Length of the whole sequence.
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the items, keeping the paging information.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            page_size: self.page_size,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// `max(1, ceil(total_items / page_size))`.
///
/// A zero page size is treated as one item per page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total_items, page_size))
}

/// Slice out page `page` (1-based) of `items`.
///
/// Out-of-range requests clamp to the first or last page instead of failing.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = clamp_page(page, items.len(), page_size);

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, DEFAULT_PAGE_SIZE);

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(!page.has_next_page());
        assert!(!page.has_previous_page());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=20).collect();

        let zero = paginate(&items, 0, 16);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items.len(), 16);

        let beyond = paginate(&items, 99, 16);
        assert_eq!(beyond.page, 2);
        assert_eq!(beyond.items, vec![17, 18, 19, 20]);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let items: Vec<u32> = (1..=32).collect();
        assert_eq!(total_pages(items.len(), 16), 2);
        assert_eq!(paginate(&items, 2, 16).items.len(), 16);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = vec!['a', 'b', 'c'];
        let page = paginate(&items, 2, 0);

        assert_eq!(page.items, vec!['b']);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn map_keeps_paging_info() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 2, 2).map(|n| n * 10);

        assert_eq!(page.items, vec![30, 40]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }
}
