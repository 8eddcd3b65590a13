//! Full order book snapshot for one pair.

use super::{OrderBookTick, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardOrder {
    pub side: Side,
    pub price: f64,
    pub amount: f64,
}

impl BoardOrder {
    pub fn bid(price: f64, amount: f64) -> Self {
        Self {
            side: Side::Bid,
            price,
            amount,
        }
    }

    pub fn ask(price: f64, amount: f64) -> Self {
        Self {
            side: Side::Ask,
            price,
            amount,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Board has no bids")]
    NoBids,

    #[error("Board has no asks")]
    NoAsks,

    #[error("Insufficient depth: requested {requested}, available {available}")]
    InsufficientDepth { requested: f64, available: f64 },
}

/// Bids and asks as reported by the venue, in venue order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub bids: Vec<BoardOrder>,
    pub asks: Vec<BoardOrder>,
}

impl Board {
    pub fn new(bids: Vec<BoardOrder>, asks: Vec<BoardOrder>) -> Self {
        Self { bids, asks }
    }

    pub fn best_bid(&self) -> Option<&BoardOrder> {
        self.bids
            .iter()
            .max_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn best_ask(&self) -> Option<&BoardOrder> {
        self.asks
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn best_bid_price(&self) -> Result<f64, BoardError> {
        self.best_bid().map(|o| o.price).ok_or(BoardError::NoBids)
    }

    pub fn best_bid_amount(&self) -> Result<f64, BoardError> {
        self.best_bid().map(|o| o.amount).ok_or(BoardError::NoBids)
    }

    pub fn best_ask_price(&self) -> Result<f64, BoardError> {
        self.best_ask().map(|o| o.price).ok_or(BoardError::NoAsks)
    }

    pub fn best_ask_amount(&self) -> Result<f64, BoardError> {
        self.best_ask().map(|o| o.amount).ok_or(BoardError::NoAsks)
    }

    /// Volume-weighted price received when selling `amount` into the bids.
    pub fn average_buy_rate(&self, amount: f64) -> Result<f64, BoardError> {
        if self.bids.is_empty() {
            return Err(BoardError::NoBids);
        }
        let mut bids = self.bids.clone();
        bids.sort_by(|a, b| b.price.total_cmp(&a.price));
        walk(&bids, amount)
    }

    /// Volume-weighted price paid when buying `amount` from the asks.
    pub fn average_sell_rate(&self, amount: f64) -> Result<f64, BoardError> {
        if self.asks.is_empty() {
            return Err(BoardError::NoAsks);
        }
        let mut asks = self.asks.clone();
        asks.sort_by(|a, b| a.price.total_cmp(&b.price));
        walk(&asks, amount)
    }

    pub fn tick(&self) -> Result<OrderBookTick, BoardError> {
        let bid = self.best_bid().ok_or(BoardError::NoBids)?;
        let ask = self.best_ask().ok_or(BoardError::NoAsks)?;
        Ok(OrderBookTick {
            best_bid_price: bid.price,
            best_bid_amount: bid.amount,
            best_ask_price: ask.price,
            best_ask_amount: ask.amount,
        })
    }
}

// Levels must already be ordered best-first.
fn walk(levels: &[BoardOrder], amount: f64) -> Result<f64, BoardError> {
    let mut remaining = amount;
    let mut cost = 0.0;
    for level in levels {
        if level.amount >= remaining {
            cost += level.price * remaining;
            return Ok(cost / amount);
        }
        cost += level.price * level.amount;
        remaining -= level.amount;
    }
    Err(BoardError::InsufficientDepth {
        requested: amount,
        available: amount - remaining,
    })
}
