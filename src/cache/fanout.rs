//! Bounded concurrent per-pair fetching.
//!
//! One task per pair, at most `workers` in flight. The permit pool belongs to
//! the `FanOut` itself and is shared by every clone, so overlapping or
//! abandoned refreshes still count against the same bound. Tasks live in a
//! [`JoinSet`] owned by the caller: dropping the `collect` future aborts them.
//! Failed pairs are logged and dropped; the collection as a whole always
//! succeeds.

use crate::error::ExchangeError;
use crate::shared::CurrencyPair;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default number of concurrent in-flight requests.
pub const DEFAULT_FAN_OUT_WORKERS: usize = 10;

#[derive(Debug, Clone)]
pub struct FanOut {
    workers: usize,
    permits: Arc<Semaphore>,
}

impl FanOut {
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            workers,
            permits: Arc::new(Semaphore::new(workers)),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `fetch` for every pair and return the successes, sorted by pair.
    pub async fn collect<T, F, Fut>(
        &self,
        pairs: Vec<CurrencyPair>,
        fetch: F,
    ) -> Vec<(CurrencyPair, T)>
    where
        T: Send + 'static,
        F: Fn(CurrencyPair) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ExchangeError>> + Send + 'static,
    {
        let total = pairs.len();
        let fetch = Arc::new(fetch);
        let mut tasks = JoinSet::new();

        for pair in pairs {
            let permits = Arc::clone(&self.permits);
            let fetch = Arc::clone(&fetch);
            tasks.spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        let err = ExchangeError::Config("fan-out permits closed".to_string());
                        return (pair, Err(err));
                    }
                };
                let result = fetch(pair.clone()).await;
                (pair, result)
            });
        }

        let mut collected = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((pair, Ok(value))) => collected.push((pair, value)),
                Ok((pair, Err(e))) => {
                    tracing::warn!(pair = %pair, error = %e, "pair fetch failed, skipping")
                }
                Err(e) => tracing::warn!(error = %e, "pair fetch task did not finish"),
            }
        }
        collected.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(
            requested = total,
            succeeded = collected.len(),
            "fan-out complete"
        );
        collected
    }
}

impl Default for FanOut {
    fn default() -> Self {
        Self::new(DEFAULT_FAN_OUT_WORKERS)
    }
}
