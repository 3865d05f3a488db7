//! Error types for paginator construction and navigation.
//!
//! Every failure is raised synchronously at the call site and leaves the
//! paginator exactly as it was before the call.

use thiserror::Error;

/// Invalid construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

/// A navigation or resize request that falls outside the valid range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("page index {requested} is out of range 0..={last_page_index}")]
    PageIndex { requested: i64, last_page_index: usize },

    #[error("page size must be at least 1, got {0}")]
    PageSize(usize),
}

/// Either kind of paginator failure, for callers that funnel both through `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Failure while reading or writing a TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RangeError::PageIndex {
            requested: -1,
            last_page_index: 9,
        };
        assert_eq!(err.to_string(), "page index -1 is out of range 0..=9");
        assert_eq!(
            ConfigError::InvalidPageSize(0).to_string(),
            "initial page size must be at least 1, got 0"
        );
    }

    #[test]
    fn test_wrapping_is_transparent() {
        let err: PaginatorError = RangeError::PageSize(0).into();
        assert_eq!(err.to_string(), "page size must be at least 1, got 0");
        assert!(matches!(err, PaginatorError::Range(RangeError::PageSize(0))));
    }
}
