//! Cache Module
//!
//! Provides an in-memory key-value cache partitioned into independently
//! locked shards.

mod entry;
mod router;
mod shard;
mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use router::{HashStrategy, ShardRouter};
pub use shard::Shard;
pub use snapshot::{CacheSnapshot, ShardSnapshot};
pub use stats::{CacheStats, StatsRecorder};
pub use store::ShardedCache;
