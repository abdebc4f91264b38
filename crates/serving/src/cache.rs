//! Explicit TTL cache.
//!
//! The legacy serving layer kept module-level map/timestamp pairs; this
//! replaces them with an owned object. The TTL is injected at
//! construction and invalidation is an explicit call, so staleness
//! policy lives with whoever owns the cache, not in process-wide state.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

struct Entry<V> {
    stored_at: Instant,
    value: V,
}

/// A map whose entries expire `ttl` after insertion.
///
/// Expiry is checked on read. Expired entries stay allocated until the
/// next `insert` of the same key, `purge_expired`, or `clear`.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                tracing::trace!("cache hit");
                Some(&entry.value)
            }
            Some(_) => {
                tracing::trace!("cache entry expired");
                None
            }
            None => {
                tracing::trace!("cache miss");
                None
            }
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Drop one entry, expired or not.
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reclaim entries past their TTL.
    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, e| e.stored_at.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_get_within_ttl() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("route:1", vec![1, 2, 3]);

        assert_eq!(cache.get(&"route:1"), Some(&vec![1, 2, 3]));
        assert_eq!(cache.get(&"route:2"), None);
    }

    #[test]
    fn test_expiry() {
        let mut cache = TtlCache::new(Duration::from_millis(20));
        cache.insert("k", 1);
        assert_eq!(cache.get(&"k"), Some(&1));

        sleep(Duration::from_millis(30));
        assert_eq!(cache.get(&"k"), None);

        // Stale entry still occupies a slot until purged.
        assert_eq!(cache.len(), 1);
        cache.purge_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reinsert_resets_clock() {
        let mut cache = TtlCache::new(Duration::from_millis(40));
        cache.insert("k", 1);
        sleep(Duration::from_millis(25));
        cache.insert("k", 2);
        sleep(Duration::from_millis(25));

        // 50ms after the first insert, 25ms after the second.
        assert_eq!(cache.get(&"k"), Some(&2));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k", 7);

        assert_eq!(cache.invalidate(&"k"), Some(7));
        assert_eq!(cache.get(&"k"), None);
    }

    #[test]
    fn test_clear() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
