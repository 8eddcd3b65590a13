//! Third-party order book aggregation seam.
//!
//! Some venues can serve their tick map from a consolidated depth feed instead
//! of their own ticker. The feed is opaque to this crate; callers plug in an
//! implementation through the client builder.

use crate::error::ExchangeError;
use crate::shared::{Board, CurrencyPair, TickMap};
use crate::venue::Venue;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait DepthSource: Send + Sync {
    /// Current boards for every pair the source tracks on `venue`.
    async fn boards(&self, venue: Venue) -> Result<HashMap<CurrencyPair, Board>, ExchangeError>;
}

/// Best bid/ask of every board. Boards missing a side are skipped.
pub fn ticks_from_boards(venue: Venue, boards: &HashMap<CurrencyPair, Board>) -> TickMap {
    let mut ticks = TickMap::new();
    for (pair, board) in boards {
        match board.tick() {
            Ok(tick) => crate::shared::insert_nested(&mut ticks, pair, tick),
            Err(e) => tracing::warn!(venue = %venue, pair = %pair, error = %e, "skipping board"),
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{lookup_nested, BoardOrder};

    #[test]
    fn test_ticks_from_boards_skips_one_sided() {
        let mut boards = HashMap::new();
        boards.insert(
            CurrencyPair::new("ETH", "BTC"),
            Board::new(
                vec![BoardOrder::bid(0.04, 2.0), BoardOrder::bid(0.039, 5.0)],
                vec![BoardOrder::ask(0.041, 1.5)],
            ),
        );
        boards.insert(
            CurrencyPair::new("LTC", "BTC"),
            Board::new(vec![BoardOrder::bid(0.01, 1.0)], Vec::new()),
        );

        let ticks = ticks_from_boards(Venue::Poloniex, &boards);
        let tick = lookup_nested(&ticks, "ETH", "BTC").unwrap();
        assert_eq!(tick.best_bid_price, 0.04);
        assert_eq!(tick.best_bid_amount, 2.0);
        assert_eq!(tick.best_ask_amount, 1.5);
        assert!(lookup_nested(&ticks, "LTC", "BTC").is_none());
    }
}
