//! Snapshot Module
//!
//! Serializable copies of shard contents, used for dumps and diagnostics.

use serde::Serialize;

use crate::cache::{CacheEntry, HashStrategy};

// == Shard Snapshot ==
/// Contents of one shard at the moment it was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShardSnapshot {
    /// Shard index
    pub index: usize,
    /// Entries sorted by key
    pub entries: Vec<CacheEntry>,
}

// == Cache Snapshot ==
/// Contents of every shard, ordered by shard index.
///
/// Shards are read one after another, so the snapshot is consistent per shard
/// but not across shards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheSnapshot {
    /// Capture time (RFC 3339)
    pub taken_at: String,
    /// Hash strategy used for routing
    pub hash_strategy: HashStrategy,
    /// Per-shard contents
    pub shards: Vec<ShardSnapshot>,
}

impl CacheSnapshot {
    /// Total number of entries in the snapshot.
    pub fn total_entries(&self) -> usize {
        self.shards.iter().map(|shard| shard.entries.len()).sum()
    }

    /// Looks up a key in the snapshot.
    pub fn find(&self, key: &str) -> Option<(usize, &CacheEntry)> {
        self.shards.iter().find_map(|shard| {
            shard
                .entries
                .iter()
                .find(|entry| entry.key == key)
                .map(|entry| (shard.index, entry))
        })
    }
}
