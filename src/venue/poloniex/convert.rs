//! Poloniex wire -> shared types.

use super::wire::{CurrenciesResponse, TickerResponse};
use crate::cache::{MarketSnapshot, SnapshotBuilder};
use crate::error::ExchangeError;
use crate::shared::{insert_nested, CurrencyPair, OrderBookTick, Precision, PrecisionMap};

/// Ticker keys put the settlement first: `BTC_BCN` is BCN priced in BTC.
pub fn parse_market(key: &str) -> Option<CurrencyPair> {
    CurrencyPair::split(key, '_').map(|p| CurrencyPair::new(p.settlement, p.trading))
}

/// Request parameter for a pair: `SETTLEMENT_TRADING`.
pub fn market_param(trading: &str, settlement: &str) -> String {
    format!("{}_{}", settlement.to_uppercase(), trading.to_uppercase())
}

pub fn snapshot(resp: &TickerResponse) -> Result<MarketSnapshot, ExchangeError> {
    let mut builder = SnapshotBuilder::default();
    for (key, entry) in resp {
        let Some(pair) = parse_market(key) else {
            tracing::warn!(market = %key, "couldn't parse currency pair, skipping");
            continue;
        };
        builder
            .insert_rate(&pair, entry.last.to_f64()?)
            .insert_volume(&pair, entry.base_volume.to_f64()?)
            .insert_tick(
                &pair,
                OrderBookTick {
                    best_bid_price: entry.highest_bid.to_f64()?,
                    best_ask_price: entry.lowest_ask.to_f64()?,
                    ..OrderBookTick::default()
                },
            );
    }
    Ok(builder.build())
}

pub fn precision_map(resp: &TickerResponse) -> PrecisionMap {
    let mut map = PrecisionMap::new();
    for (key, entry) in resp {
        if let Some(pair) = parse_market(key) {
            insert_nested(
                &mut map,
                &pair,
                Precision::new(entry.last.precision(), entry.base_volume.precision()),
            );
        }
    }
    map
}

pub fn frozen(resp: &CurrenciesResponse) -> Vec<String> {
    let mut frozen: Vec<String> = resp
        .iter()
        .filter(|(_, c)| c.frozen == 1 || c.delisted == 1 || c.disabled == 1)
        .map(|(name, _)| name.to_uppercase())
        .collect();
    frozen.sort();
    frozen
}
