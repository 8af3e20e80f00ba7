//! Cache Entry Module
//!
//! Defines the key/value pair stored inside a shard.

use serde::Serialize;

// == Cache Entry ==
/// A single stored key/value pair.
///
/// Entries are replaced whole on overwrite; the value is never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    /// The key this entry is stored under
    pub key: String,
    /// The stored value
    pub value: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
