//! Cobinhood wire types. Payloads are wrapped in `{"success": .., "result": ..}`.

use crate::error::ExchangeError;
use crate::shared::NumStr;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error_code: String,
}

impl<T> Envelope<T> {
    /// The payload, or the venue's error code when `success` is false.
    pub fn into_result(self) -> Result<T, ExchangeError> {
        if !self.success {
            let code = self
                .error
                .map(|e| e.error_code)
                .unwrap_or_else(|| "unknown".to_string());
            return Err(ExchangeError::Upstream(format!("cobinhood: {}", code)));
        }
        self.result
            .ok_or_else(|| ExchangeError::Parse("cobinhood: success without result".to_string()))
    }
}

/// `GET /v1/market/trading_pairs`
#[derive(Debug, Clone, Deserialize)]
pub struct TradingPairs {
    pub trading_pairs: Vec<TradingPair>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradingPair {
    pub base_currency_id: String,
    pub quote_currency_id: String,
}

/// `GET /v1/market/tickers`
#[derive(Debug, Clone, Deserialize)]
pub struct Tickers {
    pub tickers: Vec<TickerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickerEntry {
    pub trading_pair_id: String,
    pub last_trade_price: NumStr,
    #[serde(rename = "24h_volume")]
    pub volume_24h: NumStr,
    pub lowest_ask: NumStr,
    pub highest_bid: NumStr,
}

/// `GET /v1/market/currencies`
#[derive(Debug, Clone, Deserialize)]
pub struct Currencies {
    pub currencies: Vec<CurrencyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyEntry {
    pub currency: String,
    pub funding_frozen: bool,
    pub is_active: bool,
}

/// `GET /v1/market/orderbooks/{T-S}?limit=10000`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookResult {
    pub orderbook: OrderBook,
}

/// Levels are `["price", "order count", "size"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<(NumStr, NumStr, NumStr)>,
    pub asks: Vec<(NumStr, NumStr, NumStr)>,
}
