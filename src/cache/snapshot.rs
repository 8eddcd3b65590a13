//! Rates, volumes and ticks captured by one refresh.

use crate::error::ExchangeError;
use crate::shared::{
    insert_nested, lookup_nested, nested_pairs, CurrencyPair, OrderBookTick, RateMap, TickMap,
    VolumeMap,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable result of a successful refresh. All three maps come from the
/// same fetch; the cache swaps the whole snapshot at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub rates: RateMap,
    pub volumes: VolumeMap,
    pub ticks: TickMap,
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    pub fn rate(&self, trading: &str, settlement: &str) -> Result<f64, ExchangeError> {
        lookup(&self.rates, trading, settlement).copied()
    }

    pub fn volume(&self, trading: &str, settlement: &str) -> Result<f64, ExchangeError> {
        lookup(&self.volumes, trading, settlement).copied()
    }

    pub fn tick(&self, trading: &str, settlement: &str) -> Result<OrderBookTick, ExchangeError> {
        lookup(&self.ticks, trading, settlement).copied()
    }

    /// Pairs with a rate, sorted.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        nested_pairs(&self.rates)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

fn lookup<'a, V>(
    map: &'a crate::shared::PairMap<V>,
    trading: &str,
    settlement: &str,
) -> Result<&'a V, ExchangeError> {
    let trading = trading.to_uppercase();
    let settlement = settlement.to_uppercase();
    lookup_nested(map, &trading, &settlement)
        .ok_or_else(|| ExchangeError::not_found(&trading, &settlement))
}

/// Accumulates one refresh locally before it becomes visible.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    rates: RateMap,
    volumes: VolumeMap,
    ticks: TickMap,
}

impl SnapshotBuilder {
    pub fn insert_rate(&mut self, pair: &CurrencyPair, rate: f64) -> &mut Self {
        insert_nested(&mut self.rates, pair, rate);
        self
    }

    pub fn insert_volume(&mut self, pair: &CurrencyPair, volume: f64) -> &mut Self {
        insert_nested(&mut self.volumes, pair, volume);
        self
    }

    pub fn insert_tick(&mut self, pair: &CurrencyPair, tick: OrderBookTick) -> &mut Self {
        insert_nested(&mut self.ticks, pair, tick);
        self
    }

    pub fn len(&self) -> usize {
        self.rates.values().map(|inner| inner.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn build(self) -> MarketSnapshot {
        MarketSnapshot {
            rates: self.rates,
            volumes: self.volumes,
            ticks: self.ticks,
            fetched_at: Utc::now(),
        }
    }
}
