//! Wall-clock TTL cache keyed by logical resource name.
//!
//! Expired entries are evicted lazily on the next read; nothing sweeps the
//! map in the background. This is not a consistency-critical cache: stale
//! reads within the TTL window are accepted and no backend invalidation
//! signal is consumed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Mutex::new(HashMap::new()) }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value, evicting it first if it has outlived the
    /// TTL.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        let mut entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        entries.insert(key.into(), Entry { value, stored_at: Instant::now() });
    }

    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        entries.remove(key);
    }

    #[cfg(test)]
    fn backdate(&self, key: &str, age: Duration) {
        let mut entries = self.entries.lock().unwrap_or_else(|poison| poison.into_inner());
        if let Some(entry) = entries.get_mut(key) {
            entry.stored_at = Instant::now().checked_sub(age).expect("backdate beyond clock epoch");
        }
    }
}
