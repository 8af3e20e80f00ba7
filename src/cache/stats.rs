//! Cache Statistics Module
//!
//! Tracks lookup hits and misses plus write and delete counts.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Recorder ==
/// Lock-free counters updated by cache operations.
///
/// Counters use relaxed ordering; they are monotonic tallies and never guard
/// other memory.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    deletes: AtomicU64,
}

impl StatsRecorder {
    // == Constructor ==
    /// Creates a recorder with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the set counter.
    pub fn record_set(&self) {
        self.sets.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the delete counter. Only deletes that removed an entry count.
    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Builds a [`CacheStats`] from the current counters and shard sizes.
    pub fn snapshot(&self, shard_entries: Vec<usize>) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            total_entries: shard_entries.iter().sum(),
            shard_entries,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that did not find their key
    pub misses: u64,
    /// Completed set operations, including overwrites
    pub sets: u64,
    /// Delete operations that removed an entry
    pub deletes: u64,
    /// Entries across all shards
    pub total_entries: usize,
    /// Entries per shard, indexed by shard
    pub shard_entries: Vec<usize>,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
