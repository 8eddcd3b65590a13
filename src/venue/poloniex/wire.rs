//! Poloniex wire types.

use crate::shared::NumStr;
use serde::Deserialize;
use std::collections::HashMap;

/// One entry of `returnTicker`, keyed `SETTLEMENT_TRADING`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry {
    pub last: NumStr,
    pub lowest_ask: NumStr,
    pub highest_bid: NumStr,
    pub base_volume: NumStr,
}

pub type TickerResponse = HashMap<String, TickerEntry>;

/// One entry of `returnCurrencies`, keyed by asset symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyEntry {
    #[serde(default)]
    pub disabled: i64,
    #[serde(default)]
    pub delisted: i64,
    #[serde(default)]
    pub frozen: i64,
}

pub type CurrenciesResponse = HashMap<String, CurrencyEntry>;

/// `returnOrderBook`: levels are `["price", amount]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookResponse {
    pub asks: Vec<(NumStr, NumStr)>,
    pub bids: Vec<(NumStr, NumStr)>,
}
