//! Shard Router Module
//!
//! Maps keys to shard indices. Routing is a pure function of the key, the
//! shard count and the hash strategy, so a key always lands on the same shard
//! for the lifetime of a cache.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{CacheError, Result};

// == Hash Strategy ==
/// Hash function used to pick a shard for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// 64-bit xxh3 over the key bytes
    #[default]
    Xxh3,
    /// Byte length of the key. Keys of equal length always share a shard.
    #[serde(rename = "length")]
    KeyLength,
}

impl HashStrategy {
    /// Hashes a key with this strategy.
    pub fn hash(&self, key: &str) -> u64 {
        match self {
            HashStrategy::Xxh3 => xxh3_64(key.as_bytes()),
            HashStrategy::KeyLength => key.len() as u64,
        }
    }

    /// Returns the configuration name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashStrategy::Xxh3 => "xxh3",
            HashStrategy::KeyLength => "length",
        }
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashStrategy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xxh3" => Ok(HashStrategy::Xxh3),
            "length" => Ok(HashStrategy::KeyLength),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown hash strategy '{}' (expected 'xxh3' or 'length')",
                other
            ))),
        }
    }
}

// == Shard Router ==
/// Deterministic key-to-shard mapping for a fixed shard count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardRouter {
    num_shards: usize,
    strategy: HashStrategy,
}

impl ShardRouter {
    // == Constructor ==
    /// Creates a router over `num_shards` shards.
    ///
    /// Fails with [`CacheError::InvalidShardCount`] when `num_shards` is zero.
    pub fn new(num_shards: usize, strategy: HashStrategy) -> Result<Self> {
        if num_shards == 0 {
            return Err(CacheError::InvalidShardCount(num_shards));
        }
        Ok(Self {
            num_shards,
            strategy,
        })
    }

    // == Shard For ==
    /// Returns the shard index for `key`, always in `[0, num_shards)`.
    pub fn shard_for(&self, key: &str) -> usize {
        (self.strategy.hash(key) % self.num_shards as u64) as usize
    }

    /// Number of shards this router distributes over.
    pub fn num_shards(&self) -> usize {
        self.num_shards
    }

    /// Hash strategy in use.
    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_rejects_zero_shards() {
        let result = ShardRouter::new(0, HashStrategy::Xxh3);
        assert_eq!(result, Err(CacheError::InvalidShardCount(0)));
    }

    #[test]
    fn test_router_single_shard_routes_everything_to_zero() {
        let router = ShardRouter::new(1, HashStrategy::Xxh3).unwrap();
        for key in ["", "a", "Name", "Profession", "some much longer key"] {
            assert_eq!(router.shard_for(key), 0);
        }
    }

    #[test]
    fn test_key_length_strategy_routes_by_byte_length_mod_shards() {
        let router = ShardRouter::new(4, HashStrategy::KeyLength).unwrap();

        assert_eq!(router.shard_for("Name"), 0);
        assert_eq!(router.shard_for("Age"), 3);
        assert_eq!(router.shard_for("Sex"), 3);
        assert_eq!(router.shard_for("Blood"), 1);
        assert_eq!(router.shard_for("Profession"), 2);
    }

    #[test]
    fn test_key_length_strategy_counts_bytes() {
        let router = ShardRouter::new(8, HashStrategy::KeyLength).unwrap();
        // "é" is two bytes in UTF-8
        assert_eq!(router.shard_for("é"), 2);
    }

    #[test]
    fn test_xxh3_strategy_is_deterministic() {
        let router = ShardRouter::new(16, HashStrategy::Xxh3).unwrap();
        let first = router.shard_for("user:42");
        for _ in 0..100 {
            assert_eq!(router.shard_for("user:42"), first);
        }
        assert_eq!(
            router.shard_for("user:42"),
            (xxh3_64(b"user:42") % 16) as usize
        );
    }

    #[test]
    fn test_xxh3_spreads_equal_length_keys() {
        let router = ShardRouter::new(8, HashStrategy::Xxh3).unwrap();
        let used: std::collections::HashSet<usize> = (0..64)
            .map(|i| router.shard_for(&format!("key{:03}", i)))
            .collect();
        assert!(used.len() > 1, "equal-length keys should not all collide");
    }

    #[test]
    fn test_strategy_parse_and_display() {
        assert_eq!("xxh3".parse::<HashStrategy>(), Ok(HashStrategy::Xxh3));
        assert_eq!(" LENGTH ".parse::<HashStrategy>(), Ok(HashStrategy::KeyLength));
        assert!(matches!(
            "md5".parse::<HashStrategy>(),
            Err(CacheError::InvalidConfig(_))
        ));
        assert_eq!(HashStrategy::Xxh3.to_string(), "xxh3");
        assert_eq!(HashStrategy::KeyLength.to_string(), "length");
    }

    #[test]
    fn test_strategy_default_is_xxh3() {
        assert_eq!(HashStrategy::default(), HashStrategy::Xxh3);
    }
}
