//! Kucoin wire types. Every payload is wrapped in `{"code": .., "data": ..}`.

use crate::shared::NumStr;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<String>,
    pub data: T,
}

/// `GET /api/v1/symbols`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    pub base_currency: String,
    pub quote_currency: String,
}

/// `GET /api/v1/market/allTickers`
#[derive(Debug, Clone, Deserialize)]
pub struct AllTickers {
    pub ticker: Vec<TickerEntry>,
}

/// Inactive markets report `null` for most fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerEntry {
    pub symbol: String,
    pub last: Option<NumStr>,
    pub vol: Option<NumStr>,
    pub buy: Option<NumStr>,
    pub sell: Option<NumStr>,
    #[serde(default)]
    pub high: Option<NumStr>,
    #[serde(default)]
    pub low: Option<NumStr>,
}

/// `GET /api/v1/currencies`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyEntry {
    pub currency: String,
    pub is_withdraw_enabled: bool,
    pub is_deposit_enabled: bool,
}

/// `GET /api/v2/market/orderbook/level2?symbol=..`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<(NumStr, NumStr)>,
    pub asks: Vec<(NumStr, NumStr)>,
}
