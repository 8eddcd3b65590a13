//! Lbank wire types.

use crate::shared::NumStr;
use serde::Deserialize;

/// One element of `GET /v1/ticker.do?symbol=all`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerEntry {
    pub symbol: String,
    pub ticker: Ticker,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub latest: NumStr,
    pub vol: NumStr,
}

/// One element of `GET /v1/withdrawConfigs.do`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawConfig {
    pub asset_code: String,
    pub can_with_draw: bool,
}

/// `GET /v1/depth.do?size=60&symbol=..`
#[derive(Debug, Clone, Deserialize)]
pub struct DepthResponse {
    pub asks: Vec<(NumStr, NumStr)>,
    pub bids: Vec<(NumStr, NumStr)>,
}
