//! Kucoin wire -> shared types.

use super::wire::{AllTickers, CurrencyEntry, SymbolEntry, TickerEntry};
use crate::cache::{MarketSnapshot, SnapshotBuilder};
use crate::error::ExchangeError;
use crate::shared::{insert_nested, CurrencyPair, NumStr, OrderBookTick, Precision, PrecisionMap};

/// Market symbol used in query strings: `ETH-BTC`.
pub fn symbol(pair: &CurrencyPair) -> String {
    format!("{}-{}", pair.trading, pair.settlement)
}

pub fn pairs(entries: &[SymbolEntry]) -> Vec<CurrencyPair> {
    let mut pairs: Vec<CurrencyPair> = entries
        .iter()
        .map(|s| CurrencyPair::new(&s.base_currency, &s.quote_currency))
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs
}

fn quoted(entry: &TickerEntry) -> Option<(CurrencyPair, &NumStr, &NumStr)> {
    let Some(pair) = CurrencyPair::split(&entry.symbol, '-') else {
        tracing::warn!(symbol = %entry.symbol, "couldn't parse currency pair, skipping");
        return None;
    };
    match (&entry.last, &entry.vol) {
        (Some(last), Some(vol)) => Some((pair, last, vol)),
        _ => {
            tracing::debug!(symbol = %entry.symbol, "market has no trades, skipping");
            None
        }
    }
}

pub fn snapshot(tickers: &AllTickers) -> Result<MarketSnapshot, ExchangeError> {
    let mut builder = SnapshotBuilder::default();
    for entry in &tickers.ticker {
        let Some((pair, last, vol)) = quoted(entry) else {
            continue;
        };
        builder
            .insert_rate(&pair, last.to_f64()?)
            .insert_volume(&pair, vol.to_f64()?);
        if let (Some(buy), Some(sell)) = (&entry.buy, &entry.sell) {
            builder.insert_tick(
                &pair,
                OrderBookTick {
                    best_bid_price: buy.to_f64()?,
                    best_ask_price: sell.to_f64()?,
                    ..OrderBookTick::default()
                },
            );
        }
    }
    Ok(builder.build())
}

/// Price precision is the widest of the quoted prices; amount precision
/// follows the volume.
pub fn precision_map(tickers: &AllTickers) -> PrecisionMap {
    let mut map = PrecisionMap::new();
    for entry in &tickers.ticker {
        let Some((pair, _, vol)) = quoted(entry) else {
            continue;
        };
        let price = [&entry.buy, &entry.sell, &entry.high, &entry.low]
            .into_iter()
            .flatten()
            .map(NumStr::precision)
            .max()
            .unwrap_or(0);
        insert_nested(&mut map, &pair, Precision::new(price, vol.precision()));
    }
    map
}

pub fn frozen(entries: &[CurrencyEntry]) -> Vec<String> {
    let mut frozen: Vec<String> = entries
        .iter()
        .filter(|c| !c.is_withdraw_enabled || !c.is_deposit_enabled)
        .map(|c| c.currency.to_uppercase())
        .collect();
    frozen.sort();
    frozen
}
