//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::HashStrategy;
use crate::error::{CacheError, Result};

/// Environment variable holding the shard count.
pub const ENV_NUM_SHARDS: &str = "CACHE_NUM_SHARDS";
/// Environment variable holding the hash strategy name.
pub const ENV_HASH_STRATEGY: &str = "CACHE_HASH_STRATEGY";

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of independently locked shards
    pub num_shards: usize,
    /// Hash function used to route keys to shards
    pub hash_strategy: HashStrategy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_NUM_SHARDS` - Number of shards (default: 4)
    /// - `CACHE_HASH_STRATEGY` - `xxh3` or `length` (default: xxh3)
    ///
    /// Unset variables fall back to defaults. Set but unparsable values are
    /// reported as [`CacheError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let num_shards = match env::var(ENV_NUM_SHARDS) {
            Ok(raw) => parse_num_shards(&raw)?,
            Err(_) => defaults.num_shards,
        };

        let hash_strategy = match env::var(ENV_HASH_STRATEGY) {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.hash_strategy,
        };

        Ok(Self {
            num_shards,
            hash_strategy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_shards: 4,
            hash_strategy: HashStrategy::Xxh3,
        }
    }
}

fn parse_num_shards(raw: &str) -> Result<usize> {
    let parsed: i64 = raw.trim().parse().map_err(|_| {
        CacheError::InvalidConfig(format!("{}='{}' is not an integer", ENV_NUM_SHARDS, raw))
    })?;

    if parsed <= 0 {
        return Err(CacheError::InvalidConfig(format!(
            "{}={} must be positive",
            ENV_NUM_SHARDS, parsed
        )));
    }

    usize::try_from(parsed).map_err(|_| {
        CacheError::InvalidConfig(format!("{}={} is out of range", ENV_NUM_SHARDS, parsed))
    })
}
