//! Bitflyer wire types.

use crate::shared::NumStr;
use serde::Deserialize;

/// `GET /ticker`
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    pub product_code: String,
    pub ltp: NumStr,
    pub volume: NumStr,
    pub best_bid: NumStr,
    pub best_ask: NumStr,
    #[serde(default)]
    pub best_bid_size: Option<NumStr>,
    #[serde(default)]
    pub best_ask_size: Option<NumStr>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardLevel {
    pub price: NumStr,
    pub size: NumStr,
}

/// `GET /board?product_code=..`
#[derive(Debug, Clone, Deserialize)]
pub struct BoardResponse {
    #[serde(default)]
    pub mid_price: Option<NumStr>,
    pub bids: Vec<BoardLevel>,
    pub asks: Vec<BoardLevel>,
}
