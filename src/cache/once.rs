//! Fetch-once cell for data that never goes stale within a process.

use async_lock::{Mutex, RwLock};
use std::future::Future;
use std::sync::Arc;

pub struct OnceCache<T> {
    label: &'static str,
    value: RwLock<Option<Arc<T>>>,
    init: Mutex<()>,
}

impl<T> OnceCache<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: RwLock::new(None),
            init: Mutex::new(()),
        }
    }

    /// Return the value, running `init` only if nothing is stored yet.
    /// A failed `init` leaves the cell empty.
    pub async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.value.read().await.as_ref() {
            return Ok(Arc::clone(value));
        }

        let _initializing = self.init.lock().await;
        if let Some(value) = self.value.read().await.as_ref() {
            return Ok(Arc::clone(value));
        }

        tracing::debug!(cache = self.label, "initializing");
        let value = Arc::new(init().await?);
        *self.value.write().await = Some(Arc::clone(&value));
        Ok(value)
    }

    pub async fn get(&self) -> Option<Arc<T>> {
        self.value.read().await.clone()
    }

    pub async fn clear(&self) {
        let _initializing = self.init.lock().await;
        *self.value.write().await = None;
    }
}
