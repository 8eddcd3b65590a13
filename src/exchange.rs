//! The `PublicApi` capability every venue adapter implements.

use crate::cache::MarketSnapshot;
use crate::error::ExchangeError;
use crate::shared::{
    lookup_nested, Board, CurrencyPair, Precision, PrecisionMap, RateMap, TickMap, VolumeMap,
};
use crate::venue::Venue;
use async_trait::async_trait;
use std::sync::Arc;

/// Public market data of one venue.
///
/// Adapters provide the venue-specific primitives; the lookups on top of them
/// are shared. Asset symbols are matched case-insensitively.
#[async_trait]
pub trait PublicApi: Send + Sync {
    fn venue(&self) -> Venue;

    /// Every pair the venue lists.
    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError>;

    /// Fresh rates, volumes and ticks, refreshing when the TTL expired.
    async fn snapshot(&self) -> Result<Arc<MarketSnapshot>, ExchangeError>;

    /// Full order book for one pair.
    async fn board(&self, trading: &str, settlement: &str) -> Result<Board, ExchangeError>;

    /// Per-pair decimal precision, fetched once.
    async fn precision_map(&self) -> Result<Arc<PrecisionMap>, ExchangeError>;

    /// Assets whose deposits or withdrawals are disabled.
    async fn frozen_currency(&self) -> Result<Vec<String>, ExchangeError>;

    /// Drop every cached value; the next call refetches.
    async fn clear_caches(&self);

    // ── Provided ─────────────────────────────────────────────────────────

    async fn rate(&self, trading: &str, settlement: &str) -> Result<f64, ExchangeError> {
        let pair = CurrencyPair::new(trading, settlement);
        if pair.is_identity() {
            return Ok(1.0);
        }
        self.snapshot().await?.rate(&pair.trading, &pair.settlement)
    }

    async fn volume(&self, trading: &str, settlement: &str) -> Result<f64, ExchangeError> {
        self.snapshot().await?.volume(trading, settlement)
    }

    async fn rate_map(&self) -> Result<RateMap, ExchangeError> {
        Ok(self.snapshot().await?.rates.clone())
    }

    async fn volume_map(&self) -> Result<VolumeMap, ExchangeError> {
        Ok(self.snapshot().await?.volumes.clone())
    }

    async fn order_book_tick_map(&self) -> Result<TickMap, ExchangeError> {
        Ok(self.snapshot().await?.ticks.clone())
    }

    async fn precise(&self, trading: &str, settlement: &str) -> Result<Precision, ExchangeError> {
        let pair = CurrencyPair::new(trading, settlement);
        if pair.is_identity() {
            return Ok(Precision::default());
        }
        let map = self.precision_map().await?;
        lookup_nested(&*map, &pair.trading, &pair.settlement)
            .copied()
            .ok_or_else(|| ExchangeError::not_found(&pair.trading, &pair.settlement))
    }
}
