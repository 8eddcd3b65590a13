//! Shared market-data types used by every venue adapter.
//!
//! Asset symbols are always stored upper-case. Nested maps are keyed
//! `trading -> settlement -> value`, the shape every public accessor returns.

pub mod board;
pub mod precision;
pub mod serde_util;

pub use board::{Board, BoardError, BoardOrder};
pub use precision::{decimal_places, Precision};
pub use serde_util::NumStr;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── CurrencyPair ────────────────────────────────────────────────────────────

/// A market identified by its trading (base) and settlement (quote) asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub trading: String,
    pub settlement: String,
}

impl CurrencyPair {
    /// Build a pair, upper-casing both symbols.
    pub fn new(trading: impl AsRef<str>, settlement: impl AsRef<str>) -> Self {
        Self {
            trading: trading.as_ref().to_uppercase(),
            settlement: settlement.as_ref().to_uppercase(),
        }
    }

    /// Split a venue symbol such as `eth_btc` or `ETH-BTC` on `sep`.
    ///
    /// Returns `None` unless the symbol has exactly two non-empty halves.
    pub fn split(symbol: &str, sep: char) -> Option<Self> {
        let mut parts = symbol.split(sep);
        let trading = parts.next().filter(|s| !s.is_empty())?;
        let settlement = parts.next().filter(|s| !s.is_empty())?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(trading, settlement))
    }

    /// Match a product code against known settlement suffixes, e.g.
    /// `BTC_JPY` or `FX_BTC_JPY` with `["JPY"]`.
    ///
    /// The settlement must end the symbol and must not start it. Underscores
    /// are dropped from the trading half.
    pub fn from_suffix(symbol: &str, settlements: &[&str]) -> Option<Self> {
        let upper = symbol.to_uppercase();
        for settlement in settlements {
            let Some(idx) = upper.rfind(settlement) else {
                continue;
            };
            if idx == 0 || idx + settlement.len() != upper.len() {
                continue;
            }
            let trading: String = upper[..idx].chars().filter(|c| *c != '_').collect();
            if trading.is_empty() {
                continue;
            }
            return Some(Self::new(trading, settlement));
        }
        None
    }

    pub fn is_identity(&self) -> bool {
        self.trading == self.settlement
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.trading, self.settlement)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order book side: Bid (buy interest) or Ask (sell interest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Bid"),
            Side::Ask => write!(f, "Ask"),
        }
    }
}

// ─── OrderBookTick ───────────────────────────────────────────────────────────

/// Best bid and best ask of one pair at refresh time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBookTick {
    pub best_bid_price: f64,
    pub best_bid_amount: f64,
    pub best_ask_price: f64,
    pub best_ask_amount: f64,
}

// ─── Nested maps ─────────────────────────────────────────────────────────────

/// `trading -> settlement -> V`.
pub type PairMap<V> = HashMap<String, HashMap<String, V>>;

pub type RateMap = PairMap<f64>;
pub type VolumeMap = PairMap<f64>;
pub type TickMap = PairMap<OrderBookTick>;
pub type PrecisionMap = PairMap<Precision>;

pub fn insert_nested<V>(map: &mut PairMap<V>, pair: &CurrencyPair, value: V) {
    map.entry(pair.trading.clone())
        .or_default()
        .insert(pair.settlement.clone(), value);
}

pub fn lookup_nested<'a, V>(map: &'a PairMap<V>, trading: &str, settlement: &str) -> Option<&'a V> {
    map.get(trading).and_then(|inner| inner.get(settlement))
}

/// Every `(trading, settlement)` key in the map, sorted.
pub fn nested_pairs<V>(map: &PairMap<V>) -> Vec<CurrencyPair> {
    let mut pairs: Vec<CurrencyPair> = map
        .iter()
        .flat_map(|(trading, inner)| {
            inner
                .keys()
                .map(move |settlement| CurrencyPair::new(trading, settlement))
        })
        .collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_new_uppercases() {
        let pair = CurrencyPair::new("eth", "btc");
        assert_eq!(pair.trading, "ETH");
        assert_eq!(pair.settlement, "BTC");
        assert_eq!(pair.to_string(), "ETH/BTC");
        assert!(!pair.is_identity());
        assert!(CurrencyPair::new("btc", "BTC").is_identity());
    }

    #[test]
    fn test_pair_split() {
        assert_eq!(
            CurrencyPair::split("eth_btc", '_'),
            Some(CurrencyPair::new("ETH", "BTC"))
        );
        assert_eq!(
            CurrencyPair::split("ETH-USDT", '-'),
            Some(CurrencyPair::new("ETH", "USDT"))
        );
        assert_eq!(CurrencyPair::split("ETHBTC", '_'), None);
        assert_eq!(CurrencyPair::split("_BTC", '_'), None);
        assert_eq!(CurrencyPair::split("A_B_C", '_'), None);
    }

    #[test]
    fn test_pair_from_suffix() {
        let settlements = ["JPY", "USD", "EUR"];
        assert_eq!(
            CurrencyPair::from_suffix("BTC_JPY", &settlements),
            Some(CurrencyPair::new("BTC", "JPY"))
        );
        assert_eq!(
            CurrencyPair::from_suffix("FX_BTC_JPY", &settlements),
            Some(CurrencyPair::new("FXBTC", "JPY"))
        );
        assert_eq!(CurrencyPair::from_suffix("JPY", &settlements), None);
        assert_eq!(CurrencyPair::from_suffix("BTCJPY_MAR", &settlements), None);
    }

    #[test]
    fn test_nested_helpers() {
        let mut map = RateMap::new();
        insert_nested(&mut map, &CurrencyPair::new("ETH", "BTC"), 0.04);
        insert_nested(&mut map, &CurrencyPair::new("BCN", "BTC"), 0.00000044);
        insert_nested(&mut map, &CurrencyPair::new("ETH", "USDT"), 2500.0);

        assert_eq!(lookup_nested(&map, "ETH", "BTC"), Some(&0.04));
        assert_eq!(lookup_nested(&map, "ETH", "JPY"), None);
        assert_eq!(lookup_nested(&map, "XXX", "BTC"), None);

        let pairs = nested_pairs(&map);
        assert_eq!(
            pairs,
            vec![
                CurrencyPair::new("BCN", "BTC"),
                CurrencyPair::new("ETH", "BTC"),
                CurrencyPair::new("ETH", "USDT"),
            ]
        );
    }

    #[test]
    fn test_side_serde() {
        let bid: Side = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(bid, Side::Bid);
        let ask: Side = serde_json::from_str("\"ask\"").unwrap();
        assert_eq!(ask, Side::Ask);
    }
}
