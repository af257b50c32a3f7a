//! TTL cache for lookup results.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use hashbrown::HashMap;
use tracing::debug;

/// Cache key for a coordinate pair. Precision is fixed at six decimal
/// places so differently formatted queries for the same point share an
/// entry.
pub fn coordinate_key(lat: f64, lon: f64) -> String {
    format!("{lat:.6},{lon:.6}")
}

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Expiring memo for resolution results.
///
/// Eviction is lazy: an expired entry is dropped when next looked up.
/// There is no background sweep, so entries that are never touched again
/// stay resident until overwritten.
pub struct QueryCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a
    /// miss or after expiry.
    ///
    /// The compute runs outside the lock. Two racing callers on the same
    /// cold key may both compute; the later insert wins, which is harmless
    /// because results for a given key are identical.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = entries.get(key) {
                if entry.inserted_at.elapsed() < self.ttl {
                    debug!(key, "cache hit");
                    return entry.value.clone();
                }
                debug!(key, "cache entry expired");
                entries.remove(key);
            }
        }

        let value = compute();

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                inserted_at: Instant::now(),
            },
        );
        value
    }

    /// Number of resident entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
