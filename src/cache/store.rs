//! Lazily refreshed TTL value.
//!
//! Readers share a read lock on the fast path. When the value is stale, callers
//! queue on a single refresh mutex and re-check before fetching, so at most one
//! fetch runs per stale window no matter how many readers arrive. The new value
//! is built entirely outside the slot and swapped in under a short write lock.
//! A failed fetch leaves the slot untouched and the next caller retries.

use crate::cache::policy::RefreshPolicy;
use crate::clock::Clock;
use async_lock::{Mutex, RwLock};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

struct Slot<T> {
    value: Option<Arc<T>>,
    last_updated: Option<Instant>,
    generation: u64,
}

pub struct TtlCache<T> {
    label: &'static str,
    policy: RefreshPolicy,
    clock: Arc<dyn Clock>,
    slot: RwLock<Slot<T>>,
    refresh: Mutex<()>,
}

impl<T> TtlCache<T> {
    pub fn new(label: &'static str, policy: RefreshPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            label,
            policy,
            clock,
            slot: RwLock::new(Slot {
                value: None,
                last_updated: None,
                generation: 0,
            }),
            refresh: Mutex::new(()),
        }
    }

    /// Return the cached value, refreshing it through `fetch` when stale.
    pub async fn get_or_refresh<F, Fut, E>(&self, fetch: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.fresh().await {
            tracing::trace!(cache = self.label, "cache hit");
            return Ok(value);
        }

        let _refreshing = self.refresh.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(value) = self.fresh().await {
            tracing::trace!(cache = self.label, "refreshed by concurrent caller");
            return Ok(value);
        }

        let started = self.clock.now();
        tracing::debug!(cache = self.label, "refreshing");
        let value = match fetch().await {
            Ok(value) => Arc::new(value),
            Err(e) => {
                tracing::debug!(cache = self.label, "refresh failed, keeping previous value");
                return Err(e);
            }
        };

        let mut slot = self.slot.write().await;
        slot.value = Some(Arc::clone(&value));
        slot.last_updated = Some(started);
        slot.generation += 1;
        tracing::debug!(
            cache = self.label,
            generation = slot.generation,
            "refresh complete"
        );
        Ok(value)
    }

    /// Current value regardless of freshness.
    pub async fn peek(&self) -> Option<Arc<T>> {
        self.slot.read().await.value.clone()
    }

    pub async fn last_updated(&self) -> Option<Instant> {
        self.slot.read().await.last_updated
    }

    /// Number of successful refreshes so far.
    pub async fn generation(&self) -> u64 {
        self.slot.read().await.generation
    }

    /// Drop the value and force the next read to refresh.
    pub async fn clear(&self) {
        let _refreshing = self.refresh.lock().await;
        let mut slot = self.slot.write().await;
        slot.value = None;
        slot.last_updated = None;
    }

    async fn fresh(&self) -> Option<Arc<T>> {
        let slot = self.slot.read().await;
        if self.policy.is_stale(slot.last_updated, self.clock.now()) {
            return None;
        }
        slot.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn cache(clock: Arc<ManualClock>) -> TtlCache<u32> {
        TtlCache::new("test", RefreshPolicy::new(Duration::from_secs(3)), clock)
    }

    #[tokio::test]
    async fn test_fetches_once_within_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock.clone());
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let v = cache
                .get_or_refresh(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(7)
                })
                .await
                .unwrap();
            assert_eq!(*v, 7);
            clock.advance(Duration::from_secs(1));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // t = 3s: stale again
        cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ()>(8)
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.generation().await, 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_value() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock.clone());

        cache
            .get_or_refresh(|| async { Ok::<_, &str>(1) })
            .await
            .unwrap();
        let stamped = cache.last_updated().await;
        clock.advance(Duration::from_secs(5));

        let err = cache
            .get_or_refresh(|| async { Err::<u32, _>("venue down") })
            .await
            .unwrap_err();
        assert_eq!(err, "venue down");
        assert_eq!(*cache.peek().await.unwrap(), 1);
        assert_eq!(cache.last_updated().await, stamped);
        assert_eq!(cache.generation().await, 1);

        // still stale, so the next call retries straight away
        let v = cache
            .get_or_refresh(|| async { Ok::<_, &str>(2) })
            .await
            .unwrap();
        assert_eq!(*v, 2);
    }

    #[tokio::test]
    async fn test_clear_forces_refresh() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock);
        cache
            .get_or_refresh(|| async { Ok::<_, ()>(1) })
            .await
            .unwrap();
        cache.clear().await;
        assert!(cache.peek().await.is_none());
        let v = cache
            .get_or_refresh(|| async { Ok::<_, ()>(2) })
            .await
            .unwrap();
        assert_eq!(*v, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_share_one_fetch() {
        let clock = Arc::new(ManualClock::new());
        let cache = Arc::new(cache(clock));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_refresh(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok::<_, ()>(42)
                    })
                    .await
                    .map(|v| *v)
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(42));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
