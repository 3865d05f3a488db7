//! Paginator configuration and its TOML persistence.
//!
//! # Example
//!
//! ```rust
//! use libpager_core::PaginatorConfig;
//!
//! let config = PaginatorConfig::from_toml_str("item_count = 42").unwrap();
//! assert_eq!(config.item_count, 42);
//! assert_eq!(config.initial_page_size, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigFileError};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Construction parameters for a [`Paginator`](crate::Paginator).
///
/// `item_count` is signed because counts coming from an external collection
/// may transiently go negative; such values are treated as `0`. Omitted keys
/// fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Number of items in the collection being paged
    pub item_count: i64,

    /// Page shown first (0-based); clamped to the last page if too large
    pub initial_page_index: usize,

    /// Items per page, must be at least 1
    pub initial_page_size: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            initial_page_index: 0,
            initial_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginatorConfig {
    /// Default configuration for a collection of `item_count` items.
    pub fn with_item_count(item_count: i64) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    /// Set the initial page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    /// Set the initial page index.
    pub fn page_index(mut self, page_index: usize) -> Self {
        self.initial_page_index = page_index;
        self
    }

    /// Check the parameters a paginator cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_page_size < 1 {
            return Err(ConfigError::InvalidPageSize(self.initial_page_size));
        }
        Ok(())
    }

    /// Item count with negative values treated as empty.
    pub fn clamped_item_count(&self) -> usize {
        clamp_item_count(self.item_count)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigFileError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Negative counts arise from transient external states; treat them as empty.
pub(crate) fn clamp_item_count(item_count: i64) -> usize {
    usize::try_from(item_count.max(0)).unwrap_or(usize::MAX)
}
