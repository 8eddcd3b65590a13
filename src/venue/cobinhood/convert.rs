//! Cobinhood wire -> shared types.

use super::wire::{CurrencyEntry, OrderBook, Tickers, TradingPairs};
use crate::cache::{MarketSnapshot, SnapshotBuilder};
use crate::error::ExchangeError;
use crate::shared::{
    insert_nested, Board, BoardOrder, CurrencyPair, NumStr, OrderBookTick, Precision, PrecisionMap,
};

/// Market id used in paths: `ETH-BTC`.
pub fn market_id(pair: &CurrencyPair) -> String {
    format!("{}-{}", pair.trading, pair.settlement)
}

pub fn pairs(result: &TradingPairs) -> Vec<CurrencyPair> {
    let mut pairs: Vec<CurrencyPair> = result
        .trading_pairs
        .iter()
        .map(|p| CurrencyPair::new(&p.base_currency_id, &p.quote_currency_id))
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs
}

pub fn snapshot(result: &Tickers) -> Result<MarketSnapshot, ExchangeError> {
    let mut builder = SnapshotBuilder::default();
    for entry in &result.tickers {
        let Some(pair) = CurrencyPair::split(&entry.trading_pair_id, '-') else {
            tracing::warn!(market = %entry.trading_pair_id, "couldn't parse currency pair, skipping");
            continue;
        };
        builder
            .insert_rate(&pair, entry.last_trade_price.to_f64()?)
            .insert_volume(&pair, entry.volume_24h.to_f64()?)
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

pub fn precision_map(result: &Tickers) -> PrecisionMap {
    let mut map = PrecisionMap::new();
    for entry in &result.tickers {
        if let Some(pair) = CurrencyPair::split(&entry.trading_pair_id, '-') {
            insert_nested(
                &mut map,
                &pair,
                Precision::new(
                    entry.last_trade_price.precision(),
                    entry.volume_24h.precision(),
                ),
            );
        }
    }
    map
}

pub fn frozen(currencies: &[CurrencyEntry]) -> Vec<String> {
    let mut frozen: Vec<String> = currencies
        .iter()
        .filter(|c| c.funding_frozen || !c.is_active)
        .map(|c| c.currency.to_uppercase())
        .collect();
    frozen.sort();
    frozen
}

pub fn board(book: &OrderBook) -> Result<Board, ExchangeError> {
    // amount is the third column; the second is the order count
    let side = |levels: &[(NumStr, NumStr, NumStr)], make: fn(f64, f64) -> BoardOrder| {
        levels
            .iter()
            .map(|(price, _, size)| Ok(make(price.to_f64()?, size.to_f64()?)))
            .collect::<Result<Vec<_>, ExchangeError>>()
    };
    Ok(Board::new(
        side(&book.bids, BoardOrder::bid)?,
        side(&book.asks, BoardOrder::ask)?,
    ))
}
