//! Bitflyer wire -> shared types.

use super::wire::{BoardLevel, BoardResponse, TickerResponse};
use crate::cache::{MarketSnapshot, SnapshotBuilder};
use crate::error::ExchangeError;
use crate::shared::{
    insert_nested, Board, BoardOrder, CurrencyPair, OrderBookTick, Precision, PrecisionMap,
};

/// Settlement currencies product codes are matched against.
pub const SETTLEMENTS: [&str; 3] = ["JPY", "USD", "EUR"];

pub fn ticker_pair(ticker: &TickerResponse) -> Result<CurrencyPair, ExchangeError> {
    CurrencyPair::from_suffix(&ticker.product_code, &SETTLEMENTS).ok_or_else(|| {
        ExchangeError::Parse(format!(
            "Unrecognised product code: {}",
            ticker.product_code
        ))
    })
}

pub fn snapshot(ticker: &TickerResponse) -> Result<MarketSnapshot, ExchangeError> {
    let pair = ticker_pair(ticker)?;
    let mut builder = SnapshotBuilder::default();
    builder
        .insert_rate(&pair, ticker.ltp.to_f64()?)
        .insert_volume(&pair, ticker.volume.to_f64()?)
        .insert_tick(
            &pair,
            OrderBookTick {
                best_bid_price: ticker.best_bid.to_f64()?,
                best_bid_amount: optional(&ticker.best_bid_size)?,
                best_ask_price: ticker.best_ask.to_f64()?,
                best_ask_amount: optional(&ticker.best_ask_size)?,
            },
        );
    Ok(builder.build())
}

pub fn precision_map(ticker: &TickerResponse) -> Result<PrecisionMap, ExchangeError> {
    let pair = ticker_pair(ticker)?;
    let mut map = PrecisionMap::new();
    insert_nested(
        &mut map,
        &pair,
        Precision::new(ticker.ltp.precision(), ticker.volume.precision()),
    );
    Ok(map)
}

pub fn board(resp: &BoardResponse) -> Result<Board, ExchangeError> {
    let side = |levels: &[BoardLevel], make: fn(f64, f64) -> BoardOrder| {
        levels
            .iter()
            .map(|l| Ok(make(l.price.to_f64()?, l.size.to_f64()?)))
            .collect::<Result<Vec<_>, ExchangeError>>()
    };
    Ok(Board::new(
        side(&resp.bids, BoardOrder::bid)?,
        side(&resp.asks, BoardOrder::ask)?,
    ))
}

fn optional(value: &Option<crate::shared::NumStr>) -> Result<f64, ExchangeError> {
    value.as_ref().map_or(Ok(0.0), |v| v.to_f64())
}
