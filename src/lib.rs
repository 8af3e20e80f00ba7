//! Sharded Cache - an in-memory key-value cache split into shards
//!
//! Keys route deterministically to one of a fixed number of shards, each
//! guarded by its own reader-writer lock, so unrelated keys do not contend.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{HashStrategy, ShardedCache};
pub use config::Config;
pub use error::{CacheError, Result};
