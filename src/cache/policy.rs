//! Staleness rule.

use std::time::{Duration, Instant};

/// Default TTL for rate/volume/tick snapshots.
pub const DEFAULT_RATE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub ttl: Duration,
}

impl RefreshPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Stale when never refreshed or when `now - last >= ttl`.
    pub fn is_stale(&self, last_updated: Option<Instant>, now: Instant) -> bool {
        match last_updated {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.ttl,
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_TTL)
    }
}
