//! Derived pagination values.
//!
//! `PageState` is a snapshot computed from an item count, a page index and a
//! page size. It is never stored by the paginator; every query derives a
//! fresh one so it cannot go stale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Bounds and navigation flags for one page of a collection.
///
/// All indices are 0-based and inclusive. For an empty collection every
/// index collapses to `0` and neither direction is navigable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    pub item_count: usize,
    pub page_index: usize,
    pub page_size: usize,
    /// Index of the last item in the whole collection
    pub last_item_index: usize,
    pub last_page_index: usize,
    /// Index of the first item on the current page
    pub first_item_index: usize,
    pub last_item_index_on_page: usize,
    pub can_get_next: bool,
    pub can_get_prev: bool,
}

impl PageState {
    /// Derive the state for `page_index`. `page_size` must be at least 1.
    ///
    /// The page index is taken as given; clamping it is the caller's job.
    pub fn compute(item_count: usize, page_index: usize, page_size: usize) -> Self {
        debug_assert!(page_size >= 1);
        let last_item_index = last_item_index(item_count);
        let last_page_index = last_page_index(item_count, page_size);
        let first_item_index = page_index.saturating_mul(page_size);
        let last_item_index_on_page =
            last_item_index.min(first_item_index.saturating_add(page_size - 1));

        Self {
            item_count,
            page_index,
            page_size,
            last_item_index,
            last_page_index,
            first_item_index,
            last_item_index_on_page,
            can_get_next: page_index < last_page_index,
            can_get_prev: page_index > 0,
        }
    }

    /// Total number of pages. An empty collection still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.last_page_index + 1
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    /// Half-open item range of the current page, for slicing.
    pub fn item_range(&self) -> Range<usize> {
        self.first_item_index..self.last_item_index_on_page.saturating_add(1)
    }

    /// Whether the current page is the first one.
    pub fn is_first_page(&self) -> bool {
        !self.can_get_prev
    }

    /// Whether the current page is the last one.
    pub fn is_last_page(&self) -> bool {
        !self.can_get_next
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {}/{} (items {}-{} of {})",
            self.page_number(),
            self.page_count(),
            self.first_item_index,
            self.last_item_index_on_page,
            self.item_count
        )
    }
}

/// `max(0, item_count - 1)`
pub fn last_item_index(item_count: usize) -> usize {
    item_count.saturating_sub(1)
}

/// Index of the final page for `item_count` items. `page_size` must be at least 1.
pub fn last_page_index(item_count: usize, page_size: usize) -> usize {
    last_item_index(item_count) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_hundred() {
        let state = PageState::compute(100, 0, 10);
        assert_eq!(state.first_item_index, 0);
        assert_eq!(state.last_item_index_on_page, 9);
        assert_eq!(state.last_item_index, 99);
        assert_eq!(state.last_page_index, 9);
        assert!(state.can_get_next);
        assert!(!state.can_get_prev);
        assert_eq!(state.page_count(), 10);
        assert_eq!(state.page_number(), 1);
    }

    #[test]
    fn test_partial_last_page() {
        let state = PageState::compute(15, 1, 10);
        assert_eq!(state.first_item_index, 10);
        assert_eq!(state.last_item_index_on_page, 14);
        assert_eq!(state.item_range(), 10..15);
        assert!(state.is_last_page());
        assert!(!state.is_first_page());
    }

    #[test]
    fn test_empty_collection() {
        let state = PageState::compute(0, 0, 10);
        assert_eq!(state.first_item_index, 0);
        assert_eq!(state.last_item_index, 0);
        assert_eq!(state.last_item_index_on_page, 0);
        assert_eq!(state.last_page_index, 0);
        assert!(!state.can_get_next);
        assert!(!state.can_get_prev);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_exact_multiple() {
        // 20 items at 10 per page is two pages, not three
        assert_eq!(last_page_index(20, 10), 1);
        assert_eq!(last_page_index(21, 10), 2);
        assert_eq!(last_page_index(1, 10), 0);
    }

    #[test]
    fn test_display() {
        let state = PageState::compute(100, 4, 10);
        assert_eq!(state.to_string(), "page 5/10 (items 40-49 of 100)");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(PageState::compute(15, 1, 10)).unwrap();
        assert_eq!(json["first_item_index"], 10);
        assert_eq!(json["last_item_index_on_page"], 14);
        assert_eq!(json["can_get_next"], false);
    }
}
