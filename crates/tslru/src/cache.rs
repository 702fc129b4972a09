//! ThreadSafeLru: LRU list and statistics behind one lock

use std::hash::Hash;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::lru::LruList;
use crate::stats::CacheStats;

/// State guarded by the cache lock
struct Inner<K, V> {
    lru: LruList<K, V>,
    stats: CacheStats,
}

/// Fixed-capacity LRU cache safe to share between threads
///
/// Every operation takes the same mutex for its whole duration, so the
/// index, the recency list and the counters always change together.
/// Share it with `Arc<ThreadSafeLru<K, V>>`.
pub struct ThreadSafeLru<K, V> {
    inner: Mutex<Inner<K, V>>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> ThreadSafeLru<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    ///
    /// # Returns
    /// * `Result<ThreadSafeLru>` - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let lru = LruList::new(capacity)?;
        debug!(capacity, "created LRU cache");

        Ok(Self {
            inner: Mutex::new(Inner {
                lru,
                stats: CacheStats::new(),
            }),
            capacity,
        })
    }

    /// Create a new cache from a validated config
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Get a value and mark it most recently used
    ///
    /// # Returns
    /// * `Result<V>` - clone of the value, or `Error::KeyNotFound`
    pub fn get(&self, key: &K) -> Result<V>
    where
        V: Clone,
    {
        let mut inner = self.inner.lock();
        let Inner { lru, stats } = &mut *inner;

        match lru.get(key) {
            Some(value) => {
                stats.record_hit();
                Ok(value.clone())
            }
            None => {
                stats.record_miss();
                trace!("cache miss");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Get a value without changing recency order or statistics
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().lru.peek(key).cloned()
    }

    /// Membership test; never changes recency order or statistics
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().lru.contains(key)
    }

    /// Insert or update a value, evicting the least recently used entry
    /// if the cache would exceed its capacity
    pub fn put(&self, key: K, value: V) {
        let mut inner = self.inner.lock();
        let Inner { lru, stats } = &mut *inner;

        let before = lru.len();
        let evicted = lru.put(key, value);

        // A new key either grew the list or pushed another entry out
        if evicted.is_some() || lru.len() > before {
            stats.record_insert();
        }
        if evicted.is_some() {
            stats.record_eviction();
        }
        // Evicted entry drops here, still under the lock
    }

    /// Remove a key
    ///
    /// # Returns
    /// * `bool` - whether an entry was removed
    pub fn remove(&self, key: &K) -> bool {
        self.inner.lock().lru.remove(key).is_some()
    }

    /// Get (hits, misses)
    pub fn hit_miss_stats(&self) -> (u64, u64) {
        let inner = self.inner.lock();
        (inner.stats.hits(), inner.stats.misses())
    }

    /// Hits over lookups; 0.0 before any lookup
    pub fn hit_ratio(&self) -> f64 {
        self.inner.lock().stats.hit_ratio()
    }

    /// Zero all counters; entries are untouched
    pub fn reset_stats(&self) {
        self.inner.lock().stats.reset();
    }

    /// Snapshot of all counters
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().lru.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().lru.is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry (statistics are kept)
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.lru.len();
        inner.lru.clear();
        debug!(dropped, "cleared LRU cache");
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> Vec<K> {
        self.inner
            .lock()
            .lru
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Verify that the recency list and the index agree
    pub fn check_integrity(&self) -> bool {
        self.inner.lock().lru.check_integrity()
    }
}
