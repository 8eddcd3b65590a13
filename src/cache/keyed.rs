//! Per-key TTL cache for full order books.

use crate::clock::Clock;
use async_lock::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default lifetime of a cached board.
pub const DEFAULT_BOARD_TTL: Duration = Duration::from_secs(3);

pub struct KeyedTtlCache<K, V> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<K, (Arc<V>, Instant)>>,
}

impl<K: Eq + Hash + Clone, V> KeyedTtlCache<K, V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh entry for `key`, if any.
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let entries = self.entries.read().await;
        let (value, fetched_at) = entries.get(key)?;
        if self.clock.now().saturating_duration_since(*fetched_at) < self.ttl {
            Some(Arc::clone(value))
        } else {
            None
        }
    }

    /// Store `value` and purge every expired entry.
    pub async fn insert(&self, key: K, value: V) -> Arc<V> {
        let now = self.clock.now();
        let value = Arc::new(value);
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, fetched_at)| now.saturating_duration_since(*fetched_at) < self.ttl);
        entries.insert(key, (Arc::clone(&value), now));
        value
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
