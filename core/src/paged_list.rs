//! A collection paired with its paginator.
//!
//! `PagedList` plays the owning-session role: it holds the items, keeps the
//! paginator's item count in sync whenever the items change, and hands out
//! the current page. `PageView` is the plain-data snapshot a rendering layer
//! reads after each change.

use serde::{Deserialize, Serialize};

use crate::config::PaginatorConfig;
use crate::error::{ConfigError, RangeError};
use crate::paginator::Paginator;
use crate::state::PageState;

/// Items plus pagination state, kept consistent on every mutation.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    items: Vec<T>,
    paginator: Paginator,
}

impl<T> PagedList<T> {
    /// Page `items` from the first page with `page_size` items per page.
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, ConfigError> {
        let config = PaginatorConfig::default().page_size(page_size);
        Self::from_config(items, config)
    }

    /// Page `items` using `config`. The item count in `config` is ignored in
    /// favour of `items.len()`.
    pub fn from_config(items: Vec<T>, config: PaginatorConfig) -> Result<Self, ConfigError> {
        let mut paginator = Paginator::new(config)?;
        paginator.observe_len(items.len());
        Ok(Self { items, paginator })
    }

    /// Replace the items, keeping the current page when it still exists.
    pub fn set_items(&mut self, items: Vec<T>) -> PageState {
        self.items = items;
        self.paginator.observe_len(self.items.len())
    }

    /// Keep only the items matching `keep`, re-clamping the page if the list
    /// shrank past it.
    pub fn retain<F>(&mut self, keep: F) -> PageState
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(keep);
        self.paginator.observe_len(self.items.len())
    }

    /// Shorten the list to at most `len` items.
    pub fn truncate(&mut self, len: usize) -> PageState {
        self.items.truncate(len);
        self.paginator.observe_len(self.items.len())
    }

    /// Append items to the end of the list.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) -> PageState {
        self.items.extend(items);
        self.paginator.observe_len(self.items.len())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn state(&self) -> PageState {
        self.paginator.state()
    }

    /// Items on the current page.
    pub fn current_page(&self) -> &[T] {
        self.paginator.current_data(&self.items)
    }

    /// Every page in order, without moving the current page.
    pub fn pages(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.items.chunks(self.paginator.page_size())
    }

    pub fn next(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn prev(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn first(&mut self) -> bool {
        self.paginator.first()
    }

    pub fn last(&mut self) -> bool {
        self.paginator.last()
    }

    pub fn jump(&mut self, target: i64) -> Result<(), RangeError> {
        self.paginator.jump(target)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), RangeError> {
        self.paginator.set_page_size(page_size)
    }
}

impl<T: Clone> PagedList<T> {
    /// Owned snapshot of the current page for a rendering layer.
    pub fn view(&self) -> PageView<T> {
        let state = self.state();
        PageView {
            label: state.to_string(),
            items: self.current_page().to_vec(),
            state,
        }
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            paginator: Paginator::default(),
        }
    }
}

impl<T> FromIterator<T> for PagedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.set_items(iter.into_iter().collect());
        list
    }
}

/// What a rendering layer needs to draw one page.
///
/// Zero abstraction: plain public fields, read them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView<T> {
    pub state: PageState,

    /// Items on the current page
    pub items: Vec<T>,

    /// Page indicator, e.g. "page 2/10 (items 10-19 of 100)"
    pub label: String,
}
