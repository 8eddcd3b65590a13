//! Lbank wire -> shared types.

use super::wire::{TickerEntry, WithdrawConfig};
use crate::cache::{MarketSnapshot, SnapshotBuilder};
use crate::error::ExchangeError;
use crate::shared::{insert_nested, CurrencyPair, Precision, PrecisionMap};

/// Market symbol used in query strings: `eth_btc`.
pub fn symbol(pair: &CurrencyPair) -> String {
    format!(
        "{}_{}",
        pair.trading.to_lowercase(),
        pair.settlement.to_lowercase()
    )
}

pub fn pairs(symbols: &[String]) -> Vec<CurrencyPair> {
    let mut pairs: Vec<CurrencyPair> = symbols
        .iter()
        .filter_map(|s| CurrencyPair::split(s, '_'))
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs
}

fn parse(entry: &TickerEntry) -> Option<CurrencyPair> {
    let pair = CurrencyPair::split(&entry.symbol, '_');
    if pair.is_none() {
        tracing::warn!(symbol = %entry.symbol, "couldn't parse currency pair, skipping");
    }
    pair
}

pub fn snapshot(entries: &[TickerEntry]) -> Result<MarketSnapshot, ExchangeError> {
    let mut builder = SnapshotBuilder::default();
    for entry in entries {
        let Some(pair) = parse(entry) else {
            continue;
        };
        builder
            .insert_rate(&pair, entry.ticker.latest.to_f64()?)
            .insert_volume(&pair, entry.ticker.vol.to_f64()?);
    }
    Ok(builder.build())
}

pub fn precision_map(entries: &[TickerEntry]) -> PrecisionMap {
    let mut map = PrecisionMap::new();
    for entry in entries {
        if let Some(pair) = parse(entry) {
            insert_nested(
                &mut map,
                &pair,
                Precision::new(entry.ticker.latest.precision(), entry.ticker.vol.precision()),
            );
        }
    }
    map
}

pub fn frozen(configs: &[WithdrawConfig]) -> Vec<String> {
    let mut frozen: Vec<String> = configs
        .iter()
        .filter(|c| !c.can_with_draw)
        .map(|c| c.asset_code.to_uppercase())
        .collect();
    frozen.sort();
    frozen.dedup();
    frozen
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKERS: &str = r#"[
        {"symbol":"eth_btc","timestamp":"1410431279000",
         "ticker":{"change":4.21,"high":7722.58,"latest":7682.29,"low":7348.30,
                   "turnover":0.0,"vol":1316.3235}},
        {"symbol":"bcc_eth","ticker":{"latest":"0.52","vol":"10.5"}}]"#;

    #[test]
    fn test_snapshot() {
        let entries: Vec<TickerEntry> = serde_json::from_str(TICKERS).unwrap();
        let snapshot = snapshot(&entries).unwrap();
        assert_eq!(snapshot.rate("ETH", "BTC").unwrap(), 7682.29);
        assert_eq!(snapshot.volume("ETH", "BTC").unwrap(), 1316.3235);
        assert_eq!(snapshot.rate("bcc", "eth").unwrap(), 0.52);
        assert!(snapshot.ticks.is_empty());
    }

    #[test]
    fn test_precision_map() {
        let entries: Vec<TickerEntry> = serde_json::from_str(TICKERS).unwrap();
        let map = precision_map(&entries);
        assert_eq!(map["ETH"]["BTC"], Precision::new(2, 4));
        assert_eq!(map["BCC"]["ETH"], Precision::new(2, 1));
    }

    #[test]
    fn test_pairs_and_frozen() {
        let symbols: Vec<String> =
            serde_json::from_str(r#"["eth_btc","zec_btc","broken"]"#).unwrap();
        let pairs = pairs(&symbols);
        assert_eq!(
            pairs,
            vec![CurrencyPair::new("ETH", "BTC"), CurrencyPair::new("ZEC", "BTC")]
        );
        assert_eq!(symbol(&pairs[1]), "zec_btc");

        let configs: Vec<WithdrawConfig> = serde_json::from_str(
            r#"[{"assetCode":"eth","min":"0.01","canWithDraw":true,"fee":"0.01"},
                {"assetCode":"bcc","min":"0.01","canWithDraw":false,"fee":"0.01"}]"#,
        )
        .unwrap();
        assert_eq!(frozen(&configs), vec!["BCC"]);
    }
}
