//! Error types for the sharded cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the sharded cache.
///
/// Lookups of absent keys are not errors; they surface as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Shard count must be at least one
    #[error("Invalid shard count: {0} (must be at least 1)")]
    InvalidShardCount(usize),

    /// A configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the sharded cache.
pub type Result<T> = std::result::Result<T, CacheError>;
