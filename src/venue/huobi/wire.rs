//! Huobi wire types.

use crate::shared::NumStr;
use serde::Deserialize;

/// `GET /v1/common/symbols`
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsResponse {
    pub data: Vec<SymbolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SymbolEntry {
    pub base_currency: String,
    pub quote_currency: String,
    pub price_precision: u32,
    pub amount_precision: u32,
}

/// `GET /market/detail/merged?symbol=..`
#[derive(Debug, Clone, Deserialize)]
pub struct MergedResponse {
    pub tick: MergedTick,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergedTick {
    pub close: NumStr,
    pub vol: NumStr,
    /// `[price, amount]`
    #[serde(default)]
    pub ask: Option<Vec<NumStr>>,
    #[serde(default)]
    pub bid: Option<Vec<NumStr>>,
}

/// `GET /v1/settings/currencys?language=en-US`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrenciesResponse {
    pub data: Vec<CurrencyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurrencyEntry {
    pub display_name: String,
    #[serde(default)]
    pub withdraw_enabled: Option<bool>,
    #[serde(default)]
    pub deposit_enabled: Option<bool>,
}

/// `GET /market/depth?symbol=..&type=step0`
#[derive(Debug, Clone, Deserialize)]
pub struct DepthResponse {
    pub tick: DepthTick,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepthTick {
    pub bids: Vec<(NumStr, NumStr)>,
    pub asks: Vec<(NumStr, NumStr)>,
}
