use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, RwLock};

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: Value,
    pub cached_time: DateTime<Utc>,
}

impl CacheEntry {
    #[must_use]
    pub fn is_fresh(&self, max_age: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.cached_time < max_age
    }
}

pub type CacheMap = Arc<RwLock<HashMap<String, CacheEntry>>>;
type KeyLocks = Arc<AsyncMutex<HashMap<String, Arc<AsyncMutex<()>>>>>;

/// Upstream responses keyed by operation and id, shared across requests.
#[derive(Clone, Default)]
pub struct ResponseCache {
    entries: CacheMap,
    key_locks: KeyLocks,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_fresh(&self, key: &str, max_age: chrono::Duration) -> Option<Value> {
        self.get_fresh_at(key, max_age, Utc::now()).await
    }

    pub async fn get_fresh_at(
        &self,
        key: &str,
        max_age: chrono::Duration,
        now: DateTime<Utc>,
    ) -> Option<Value> {
        let map = self.entries.read().await;
        map.get(key)
            .filter(|entry| entry.is_fresh(max_age, now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` and drop every entry that is already older than `max_age`.
    pub async fn store(&self, key: &str, value: Value, max_age: chrono::Duration) {
        self.store_at(key, value, Utc::now(), max_age).await;
    }

    pub async fn store_at(
        &self,
        key: &str,
        value: Value,
        cached_time: DateTime<Utc>,
        max_age: chrono::Duration,
    ) {
        let mut map = self.entries.write().await;
        map.retain(|_, entry| entry.is_fresh(max_age, cached_time));
        map.insert(key.to_string(), CacheEntry { value, cached_time });
    }

    pub async fn key_lock(&self, key: &str) -> Arc<AsyncMutex<()>> {
        let mut guard = self.key_locks.lock().await;
        guard
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Hand back a lock from `key_lock`. The map entry goes away once no other task holds it.
    pub async fn release_key_lock(&self, key: &str, lock: Arc<AsyncMutex<()>>) {
        let mut guard = self.key_locks.lock().await;
        // one reference in the map, one in `lock`
        if Arc::strong_count(&lock) <= 2 {
            guard.remove(key);
        }
    }

    pub async fn lock_count(&self) -> usize {
        self.key_locks.lock().await.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
