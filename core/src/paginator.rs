//! Page position and page size for an externally owned collection.
//!
//! The paginator never holds the collection itself. It remembers the most
//! recent item count it was given and derives every bound from that count,
//! the current page index and the page size. When the collection changes
//! size, the owner calls [`Paginator::recompute`] so the page index is pulled
//! back into range.

use crate::config::{clamp_item_count, PaginatorConfig};
use crate::error::{ConfigError, RangeError};
use crate::state::{self, PageState};

/// Pagination state machine with page navigation and resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// Most recently observed item count
    item_count: usize,

    /// Current page index (0-based)
    page_index: usize,

    /// Number of items per page, always at least 1
    page_size: usize,
}

impl Paginator {
    /// Create a paginator from `config`.
    ///
    /// A negative item count is treated as `0` and an initial page past the
    /// end is clamped to the last page.
    pub fn new(config: PaginatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut paginator = Self {
            item_count: config.clamped_item_count(),
            page_index: config.initial_page_index,
            page_size: config.initial_page_size,
        };
        paginator.clamp_page_index();
        Ok(paginator)
    }

    /// Create a paginator on the first page with the default page size.
    pub fn with_item_count(item_count: i64) -> Self {
        Self {
            item_count: clamp_item_count(item_count),
            page_index: 0,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }

    /// Snapshot of every derived value for the current state.
    pub fn state(&self) -> PageState {
        PageState::compute(self.item_count, self.page_index, self.page_size)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current page index (0-based).
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn last_item_index(&self) -> usize {
        state::last_item_index(self.item_count)
    }

    pub fn last_page_index(&self) -> usize {
        state::last_page_index(self.item_count, self.page_size)
    }

    pub fn first_item_index(&self) -> usize {
        self.state().first_item_index
    }

    pub fn last_item_index_on_page(&self) -> usize {
        self.state().last_item_index_on_page
    }

    pub fn can_get_next(&self) -> bool {
        self.page_index < self.last_page_index()
    }

    pub fn can_get_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Total number of pages (at least 1).
    pub fn page_count(&self) -> usize {
        self.last_page_index() + 1
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    /// Slice of `data` visible on the current page.
    ///
    /// `data` is expected to hold `item_count` items. It is not checked: a
    /// shorter slice yields a truncated or empty page instead of an error.
    pub fn current_data<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let range = self.state().item_range();
        let end = range.end.min(data.len());
        let start = range.start.min(end);
        &data[start..end]
    }

    /// Move to the next page.
    /// Returns true if the page changed.
    pub fn next(&mut self) -> bool {
        if self.can_get_next() {
            self.page_index += 1;
            tracing::debug!(page_index = self.page_index, "next page");
            true
        } else {
            false
        }
    }

    /// Move to the previous page.
    /// Returns true if the page changed.
    pub fn prev(&mut self) -> bool {
        if self.can_get_prev() {
            self.page_index -= 1;
            tracing::debug!(page_index = self.page_index, "previous page");
            true
        } else {
            false
        }
    }

    /// Move to the first page.
    /// Returns true if the page changed.
    pub fn first(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.page_index = 0;
        tracing::debug!("first page");
        true
    }

    /// Move to the last page.
    /// Returns true if the page changed.
    pub fn last(&mut self) -> bool {
        let last_page_index = self.last_page_index();
        if self.page_index == last_page_index {
            return false;
        }
        self.page_index = last_page_index;
        tracing::debug!(page_index = self.page_index, "last page");
        true
    }

    /// Go to `target`, which must lie in `0..=last_page_index`.
    pub fn jump(&mut self, target: i64) -> Result<(), RangeError> {
        let last_page_index = self.last_page_index();
        let page_index = usize::try_from(target)
            .ok()
            .filter(|&index| index <= last_page_index)
            .ok_or_else(|| {
                tracing::warn!(requested = target, last_page_index, "rejected jump");
                RangeError::PageIndex {
                    requested: target,
                    last_page_index,
                }
            })?;
        self.page_index = page_index;
        tracing::debug!(page_index, "jumped");
        Ok(())
    }

    /// Change the page size, keeping the previously first visible item on
    /// the new current page.
    ///
    /// Allowed on an empty collection, where every page size yields a
    /// single page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), RangeError> {
        if page_size < 1 {
            tracing::warn!(page_size, "rejected page size");
            return Err(RangeError::PageSize(page_size));
        }
        let anchor = self.first_item_index();
        self.page_index = anchor / page_size;
        self.page_size = page_size;
        // Only reachable if the anchor was already out of range.
        self.clamp_page_index();
        tracing::debug!(page_size, page_index = self.page_index, anchor, "page size changed");
        Ok(())
    }

    /// Observe a new item count and pull the page index back into range.
    ///
    /// Call this whenever the underlying collection changes size. A negative
    /// count is treated as `0`.
    pub fn recompute(&mut self, item_count: i64) -> PageState {
        self.observe_len(clamp_item_count(item_count))
    }

    pub(crate) fn observe_len(&mut self, item_count: usize) -> PageState {
        self.item_count = item_count;
        self.clamp_page_index();
        self.state()
    }

    fn clamp_page_index(&mut self) {
        let last_page_index = self.last_page_index();
        if self.page_index > last_page_index {
            tracing::debug!(
                from = self.page_index,
                to = last_page_index,
                item_count = self.item_count,
                "page index clamped"
            );
            self.page_index = last_page_index;
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::with_item_count(0)
    }
}

impl From<&Paginator> for PageState {
    fn from(paginator: &Paginator) -> Self {
        paginator.state()
    }
}
