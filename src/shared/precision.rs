//! Price/amount decimal places a venue accepts for one pair.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    pub price: u32,
    pub amount: u32,
}

impl Precision {
    pub fn new(price: u32, amount: u32) -> Self {
        Self { price, amount }
    }

    /// Infer precision from the textual price and amount a venue reported.
    pub fn from_raw(price: &str, amount: &str) -> Self {
        Self {
            price: decimal_places(price),
            amount: decimal_places(amount),
        }
    }

    /// Truncate `price` to the allowed number of decimals.
    pub fn round_price(&self, price: f64) -> f64 {
        truncate(price, self.price)
    }

    /// Truncate `amount` to the allowed number of decimals.
    pub fn round_amount(&self, amount: f64) -> f64 {
        truncate(amount, self.amount)
    }
}

/// Significant decimal places in a venue number, e.g. `"0.00001664"` -> 8.
///
/// Trailing zeros do not count. Unparseable input yields 0.
pub fn decimal_places(raw: &str) -> u32 {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map(|d| d.normalize().scale())
        .unwrap_or(0)
}

fn truncate(value: f64, places: u32) -> f64 {
    match Decimal::from_f64(value) {
        Some(d) => d
            .round_dp_with_strategy(places, RoundingStrategy::ToZero)
            .to_f64()
            .unwrap_or(value),
        None => value,
    }
}
