//! Configuration errors

use std::io;
use std::path::PathBuf;

/// Error types for loading and validating a filter configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("input file {} must have .yaml or .yml extension", .0.display())]
    InvalidExtension(PathBuf),

    #[error("reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("decoding YAML: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("author name and email are required")]
    MissingAuthor,

    #[error("author email {0:?} is not a valid address")]
    InvalidAuthorEmail(String),

    #[error("at least one filter is required")]
    NoFilters,

    #[error("filter {0} must define at least one condition")]
    MissingCriteria(usize),

    #[error("filter {0} must define at least one action")]
    MissingAction(usize),

    #[error("filter {index}: {field} value {value:?} is not a valid address pattern")]
    InvalidAddress {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl ConfigError {
    /// Index of the offending filter, when the error is about one
    pub fn filter_index(&self) -> Option<usize> {
        match self {
            ConfigError::MissingCriteria(i) | ConfigError::MissingAction(i) => Some(*i),
            ConfigError::InvalidAddress { index, .. } => Some(*index),
            _ => None,
        }
    }
}
