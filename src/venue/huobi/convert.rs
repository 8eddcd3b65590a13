//! Huobi wire -> shared types.

use super::wire::{CurrenciesResponse, MergedResponse, SymbolsResponse};
use crate::error::ExchangeError;
use crate::shared::{insert_nested, CurrencyPair, NumStr, OrderBookTick, Precision, PrecisionMap};

/// Pairs and their precision, both served by the symbols endpoint.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    pub pairs: Vec<CurrencyPair>,
    pub precision: PrecisionMap,
}

/// Rate, volume and (when both sides are quoted) tick of one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub rate: f64,
    pub volume: f64,
    pub tick: Option<OrderBookTick>,
}

/// Market symbol used in query strings: `naseth`.
pub fn symbol(pair: &CurrencyPair) -> String {
    format!(
        "{}{}",
        pair.trading.to_lowercase(),
        pair.settlement.to_lowercase()
    )
}

pub fn symbol_table(resp: &SymbolsResponse) -> SymbolTable {
    let mut table = SymbolTable::default();
    for entry in &resp.data {
        let pair = CurrencyPair::new(&entry.base_currency, &entry.quote_currency);
        insert_nested(
            &mut table.precision,
            &pair,
            Precision::new(entry.price_precision, entry.amount_precision),
        );
        table.pairs.push(pair);
    }
    table.pairs.sort();
    table.pairs.dedup();
    table
}

pub fn quote(resp: &MergedResponse) -> Result<Quote, ExchangeError> {
    let tick = &resp.tick;
    let rate = tick.close.to_f64()?;
    let volume = tick.vol.to_f64()?;
    let book = match (level(&tick.bid)?, level(&tick.ask)?) {
        (Some((bid_price, bid_amount)), Some((ask_price, ask_amount))) => Some(OrderBookTick {
            best_bid_price: bid_price,
            best_bid_amount: bid_amount,
            best_ask_price: ask_price,
            best_ask_amount: ask_amount,
        }),
        _ => None,
    };
    Ok(Quote {
        rate,
        volume,
        tick: book,
    })
}

fn level(raw: &Option<Vec<NumStr>>) -> Result<Option<(f64, f64)>, ExchangeError> {
    let Some(values) = raw else {
        return Ok(None);
    };
    match values.as_slice() {
        [] => Ok(None),
        [price] => Ok(Some((price.to_f64()?, 0.0))),
        [price, amount, ..] => Ok(Some((price.to_f64()?, amount.to_f64()?))),
    }
}

pub fn frozen(resp: &CurrenciesResponse) -> Vec<String> {
    let mut frozen: Vec<String> = resp
        .data
        .iter()
        .filter(|c| match (c.withdraw_enabled, c.deposit_enabled) {
            (Some(withdraw), Some(deposit)) => !(withdraw && deposit),
            _ => false,
        })
        .map(|c| c.display_name.to_uppercase())
        .collect();
    frozen.sort();
    frozen
}
