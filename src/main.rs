//! Sharded Cache demo driver
//!
//! Builds a cache from environment configuration, runs a fixed sequence of
//! set/get/delete calls and prints the resulting shard contents.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sharded_cache::{Config, ShardedCache};

/// Main entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Store five profile fields
/// 4. Look up two of them, then delete one
/// 5. Print every shard's contents and the cache statistics
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sharded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: num_shards={}, hash_strategy={}",
        config.num_shards, config.hash_strategy
    );

    let cache = ShardedCache::from_config(&config).context("failed to create cache")?;

    cache.set("Name", "Nikhil");
    cache.set("Age", "27");
    cache.set("Sex", "Male");
    cache.set("Blood", "O+");
    cache.set("Profession", "SDE");

    for key in ["Name", "Profession"] {
        match cache.get(key) {
            Some(value) => println!("Value for {}: {}", key, value),
            None => println!("Key {} not found in cache", key),
        }
    }

    cache.delete("Age");

    let snapshot = cache.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    let stats = cache.stats();
    info!(
        "Final stats: entries={}, hits={}, misses={}, hit_rate={:.2}",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );

    Ok(())
}
