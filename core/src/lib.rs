//! libpager-core
//!
//! Pagination state for in-memory collections: which page is showing, which
//! items it covers, and whether there is anywhere to go next.
//!
//! The crate does no rendering, storage or I/O beyond loading its own
//! configuration. Callers hand it an item count (or a slice to cut pages
//! from) and read back derived bounds.
//!
//! Public API:
//! - `Paginator` - Page index and page size with navigation and resizing
//! - `PageState` - Derived bounds and navigation flags, computed on demand
//! - `PagedList` - A `Vec<T>` kept in sync with its paginator
//! - `PageView` - Plain-data snapshot of one page for a rendering layer
//! - `PaginatorConfig` - Construction parameters, loadable from TOML
//!
//! ## Usage
//!
//! ```rust
//! use libpager_core::{Paginator, PaginatorConfig};
//!
//! let mut paginator = Paginator::new(PaginatorConfig::with_item_count(100)).unwrap();
//! paginator.jump(4).unwrap();
//! paginator.set_page_size(7).unwrap();
//! assert_eq!(paginator.page_index(), 5);
//!
//! // The collection shrank under a filter
//! let state = paginator.recompute(15);
//! assert_eq!(state.page_index, 2);
//! assert!(!state.can_get_next);
//! ```

pub mod config;
pub use config::{PaginatorConfig, DEFAULT_PAGE_SIZE};

pub mod error;
pub use error::{ConfigError, ConfigFileError, PaginatorError, RangeError};

pub mod state;
pub use state::PageState;

pub mod paginator;
pub use paginator::Paginator;

pub mod paged_list;
pub use paged_list::{PageView, PagedList};
