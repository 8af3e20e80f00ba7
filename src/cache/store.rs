//! Sharded Cache Store Module
//!
//! Main cache engine: a fixed set of independently locked shards behind a
//! single get/set/delete API.

use tracing::{debug, info, trace};

use crate::cache::{
    CacheSnapshot, CacheStats, HashStrategy, Shard, ShardRouter, ShardSnapshot, StatsRecorder,
};
use crate::config::Config;
use crate::error::Result;

// == Sharded Cache ==
/// In-memory key-value cache split into a fixed number of shards.
///
/// Each key routes to exactly one shard, and each shard has its own
/// reader-writer lock. Operations on keys in different shards never contend.
/// The shard list is fixed at construction, so routing needs no lock.
///
/// # Example
/// ```
/// use sharded_cache::ShardedCache;
///
/// let cache = ShardedCache::new(4).unwrap();
/// cache.set("Name", "Nikhil");
/// assert_eq!(cache.get("Name"), Some("Nikhil".to_string()));
/// cache.delete("Name");
/// assert_eq!(cache.get("Name"), None);
/// ```
#[derive(Debug)]
pub struct ShardedCache {
    /// Shards, indexed by shard number
    shards: Vec<Shard>,
    /// Key-to-shard mapping
    router: ShardRouter,
    /// Operation counters
    stats: StatsRecorder,
}

impl ShardedCache {
    // == Constructor ==
    /// Creates a cache with `num_shards` empty shards, routed with xxh3.
    ///
    /// Fails with [`CacheError::InvalidShardCount`](crate::error::CacheError)
    /// when `num_shards` is zero.
    pub fn new(num_shards: usize) -> Result<Self> {
        Self::with_strategy(num_shards, HashStrategy::default())
    }

    /// Creates a cache with an explicit hash strategy.
    pub fn with_strategy(num_shards: usize, strategy: HashStrategy) -> Result<Self> {
        let router = ShardRouter::new(num_shards, strategy)?;
        let shards = (0..num_shards).map(Shard::new).collect();

        info!(
            "Sharded cache created: shards={}, hash={}",
            num_shards, strategy
        );

        Ok(Self {
            shards,
            router,
            stats: StatsRecorder::new(),
        })
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_strategy(config.num_shards, config.hash_strategy)
    }

    // == Routing ==
    /// Returns the index of the shard that owns `key`.
    pub fn shard_for(&self, key: &str) -> usize {
        self.router.shard_for(key)
    }

    fn shard(&self, key: &str) -> &Shard {
        &self.shards[self.shard_for(key)]
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Returns `None` if the key is absent. A get racing a write to the same
    /// key sees either the value before or after that write.
    pub fn get(&self, key: &str) -> Option<String> {
        let shard = self.shard(key);
        let value = shard.get(key);

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        trace!(key, shard = shard.index(), found = value.is_some(), "get");

        value
    }

    // == Contains ==
    /// Returns true if `key` is present. Does not affect hit/miss counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.shard(key).contains_key(key)
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any existing value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let shard = self.shard(&key);
        let index = shard.index();
        let replaced = shard.set(key.clone(), value.into());

        self.stats.record_set();
        trace!(key = key.as_str(), shard = index, replaced, "set");
    }

    // == Delete ==
    /// Removes `key` from the cache.
    ///
    /// Returns true if an entry was removed. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> bool {
        let shard = self.shard(key);
        let removed = shard.delete(key);

        if removed {
            self.stats.record_delete();
        }
        trace!(key, shard = shard.index(), removed, "delete");

        removed
    }

    // == Clear ==
    /// Removes every entry, locking one shard at a time.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self) -> usize {
        let removed = self.shards.iter().map(Shard::clear).sum();
        debug!("Cache cleared: removed {} entries", removed);
        removed
    }

    // == Length ==
    /// Returns the number of entries across all shards.
    ///
    /// Shards are counted one after another, so concurrent writers may make
    /// the total slightly stale.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    // == Is Empty ==
    /// Returns true if no shard holds an entry.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Hash strategy used for routing.
    pub fn hash_strategy(&self) -> HashStrategy {
        self.router.strategy()
    }

    /// Number of entries in the shard at `index`, or `None` if out of range.
    pub fn shard_len(&self, index: usize) -> Option<usize> {
        self.shards.get(index).map(Shard::len)
    }

    // == Snapshot ==
    /// Copies the contents of every shard, ordered by shard index.
    pub fn snapshot(&self) -> CacheSnapshot {
        let shards = self
            .shards
            .iter()
            .map(|shard| ShardSnapshot {
                index: shard.index(),
                entries: shard.entries(),
            })
            .collect();

        CacheSnapshot {
            taken_at: chrono::Utc::now().to_rfc3339(),
            hash_strategy: self.router.strategy(),
            shards,
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let shard_entries = self.shards.iter().map(Shard::len).collect();
        self.stats.snapshot(shard_entries)
    }
}
