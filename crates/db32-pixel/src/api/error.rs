//! Error types for the db32-pixel public API.
//!
//! [`ConfigError`] rejects invalid options before any grid is produced.

use std::fmt;

/// An option is outside its valid range. Values are never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_size` must be > 0
    InvalidMaxSize(i64),
    /// `scale_factor` must be >= 1
    InvalidScaleFactor(i64),
    /// `border_size` must be >= 0
    InvalidBorderSize(i64),
    /// `block_size` must be >= 1
    InvalidBlockSize(i64),
    /// `columns` must be >= 1
    InvalidColumns(i64),
    /// The settings would produce an output edge longer than `limit` pixels
    OutputTooLarge {
        /// Longest edge the pipeline will allocate
        limit: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxSize(v) => {
                write!(f, "max_size must be greater than 0, got {}", v)
            }
            ConfigError::InvalidScaleFactor(v) => {
                write!(f, "scale_factor must be at least 1, got {}", v)
            }
            ConfigError::InvalidBorderSize(v) => {
                write!(f, "border_size must not be negative, got {}", v)
            }
            ConfigError::InvalidBlockSize(v) => {
                write!(f, "block_size must be at least 1, got {}", v)
            }
            ConfigError::InvalidColumns(v) => {
                write!(f, "columns must be at least 1, got {}", v)
            }
            ConfigError::OutputTooLarge { limit } => {
                write!(f, "output would exceed {} pixels per edge", limit)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
