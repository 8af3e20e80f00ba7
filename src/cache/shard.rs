//! Shard Module
//!
//! One independently locked partition of the cache's key space.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache::CacheEntry;

// == Shard ==
/// A partition of the key space guarded by its own reader-writer lock.
///
/// Reads take the shared lock and may run concurrently. Writes take the
/// exclusive lock. Guards are scoped to each call, so a shard is never left
/// locked after an operation returns.
#[derive(Debug)]
pub struct Shard {
    /// Position of this shard in the owning cache
    index: usize,
    /// Entries routed to this shard
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl Shard {
    // == Constructor ==
    /// Creates an empty shard at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Position of this shard in the owning cache.
    pub fn index(&self) -> usize {
        self.index
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read();
        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Returns true if an existing entry was replaced.
    pub fn set(&self, key: String, value: String) -> bool {
        let entry = CacheEntry::new(key.clone(), value);
        let mut entries = self.entries.write();
        entries.insert(key, entry).is_some()
    }

    // == Delete ==
    /// Removes the entry for `key`.
    ///
    /// Returns true if an entry was removed. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> bool {
        let mut entries = self.entries.write();
        entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    // == Length ==
    /// Returns the number of entries in this shard.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if this shard holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // == Entries ==
    /// Returns a copy of this shard's entries, sorted by key.
    pub fn entries(&self) -> Vec<CacheEntry> {
        let mut snapshot: Vec<CacheEntry> = self.entries.read().values().cloned().collect();
        snapshot.sort_by(|a, b| a.key.cmp(&b.key));
        snapshot
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shard_new() {
        let shard = Shard::new(3);
        assert_eq!(shard.index(), 3);
        assert_eq!(shard.len(), 0);
        assert!(shard.is_empty());
    }

    #[test]
    fn test_shard_set_and_get() {
        let shard = Shard::new(0);

        assert!(!shard.set("key1".to_string(), "value1".to_string()));
        assert_eq!(shard.get("key1"), Some("value1".to_string()));
        assert!(shard.contains_key("key1"));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shard_get_nonexistent() {
        let shard = Shard::new(0);
        assert_eq!(shard.get("nonexistent"), None);
        assert!(!shard.contains_key("nonexistent"));
    }

    #[test]
    fn test_shard_overwrite() {
        let shard = Shard::new(0);

        shard.set("key1".to_string(), "value1".to_string());
        assert!(shard.set("key1".to_string(), "value2".to_string()));

        assert_eq!(shard.get("key1"), Some("value2".to_string()));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shard_delete() {
        let shard = Shard::new(0);

        shard.set("key1".to_string(), "value1".to_string());
        assert!(shard.delete("key1"));

        assert!(shard.is_empty());
        assert_eq!(shard.get("key1"), None);
    }

    #[test]
    fn test_shard_delete_nonexistent_is_noop() {
        let shard = Shard::new(0);
        shard.set("key1".to_string(), "value1".to_string());

        assert!(!shard.delete("nonexistent"));
        assert!(!shard.delete("nonexistent"));
        assert_eq!(shard.get("key1"), Some("value1".to_string()));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shard_entries_sorted_by_key() {
        let shard = Shard::new(0);
        shard.set("b".to_string(), "2".to_string());
        shard.set("a".to_string(), "1".to_string());
        shard.set("c".to_string(), "3".to_string());

        let keys: Vec<String> = shard.entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shard_clear() {
        let shard = Shard::new(0);
        shard.set("a".to_string(), "1".to_string());
        shard.set("b".to_string(), "2".to_string());

        assert_eq!(shard.clear(), 2);
        assert!(shard.is_empty());
    }

    #[test]
    fn test_shard_concurrent_writers_lose_nothing() {
        let shard = Arc::new(Shard::new(0));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shard = Arc::clone(&shard);
                thread::spawn(move || {
                    for i in 0..250 {
                        shard.set(format!("t{}-k{}", t, i), format!("{}", i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shard.len(), 8 * 250);
        assert_eq!(shard.get("t7-k249"), Some("249".to_string()));
    }
}
