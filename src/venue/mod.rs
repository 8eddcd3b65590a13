//! Venue adapters.
//!
//! Each venue is a vertical slice:
//! - `wire.rs`: serde structs matching the venue's JSON
//! - `convert.rs`: pure wire -> shared-type conversion
//! - `mod.rs`: the adapter implementing [`PublicApi`](crate::exchange::PublicApi)

pub mod bitflyer;
pub mod cobinhood;
pub mod huobi;
pub mod kucoin;
pub mod lbank;
pub mod poloniex;

use crate::cache::{FanOut, RefreshPolicy, TtlCache};
use crate::clock::Clock;
use crate::depth::{ticks_from_boards, DepthSource};
use crate::error::ExchangeError;
use crate::http::VenueHttp;
use crate::network;
use crate::shared::{Board, BoardOrder, NumStr, TickMap};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

// ─── Venue ───────────────────────────────────────────────────────────────────

/// Supported venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Bitflyer,
    Poloniex,
    Huobi,
    Kucoin,
    Lbank,
    Cobinhood,
}

impl Venue {
    pub const ALL: [Venue; 6] = [
        Venue::Bitflyer,
        Venue::Poloniex,
        Venue::Huobi,
        Venue::Kucoin,
        Venue::Lbank,
        Venue::Cobinhood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitflyer => "bitflyer",
            Self::Poloniex => "poloniex",
            Self::Huobi => "huobi",
            Self::Kucoin => "kucoin",
            Self::Lbank => "lbank",
            Self::Cobinhood => "cobinhood",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Bitflyer => network::BITFLYER_API_URL,
            Self::Poloniex => network::POLONIEX_API_URL,
            Self::Huobi => network::HUOBI_API_URL,
            Self::Kucoin => network::KUCOIN_API_URL,
            Self::Lbank => network::LBANK_API_URL,
            Self::Cobinhood => network::COBINHOOD_API_URL,
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Venue {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Venue::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| ExchangeError::UnknownVenue(s.to_string()))
    }
}

// ─── AdapterContext ──────────────────────────────────────────────────────────

/// Everything an adapter needs at construction time.
#[derive(Clone)]
pub struct AdapterContext {
    pub http: VenueHttp,
    pub clock: Arc<dyn Clock>,
    pub rate_ttl: Duration,
    pub board_ttl: Duration,
    pub fan_out: FanOut,
    pub depth_source: Option<Arc<dyn DepthSource>>,
}

impl AdapterContext {
    pub(crate) fn rate_policy(&self) -> RefreshPolicy {
        RefreshPolicy::new(self.rate_ttl)
    }
}

// ─── Depth-backed ticks ──────────────────────────────────────────────────────

/// Tick map served from a [`DepthSource`], with its own refresh timestamp.
pub(crate) struct DepthTicks {
    venue: Venue,
    source: Arc<dyn DepthSource>,
    cache: TtlCache<TickMap>,
}

impl DepthTicks {
    pub(crate) fn from_context(venue: Venue, ctx: &AdapterContext) -> Option<Self> {
        let source = ctx.depth_source.clone()?;
        Some(Self {
            venue,
            source,
            cache: TtlCache::new("depth_ticks", ctx.rate_policy(), Arc::clone(&ctx.clock)),
        })
    }

    pub(crate) async fn ticks(&self) -> Result<TickMap, ExchangeError> {
        let ticks = self
            .cache
            .get_or_refresh(|| async {
                let boards = self.source.boards(self.venue).await?;
                Ok::<_, ExchangeError>(ticks_from_boards(self.venue, &boards))
            })
            .await?;
        Ok((*ticks).clone())
    }

    pub(crate) async fn clear(&self) {
        self.cache.clear().await;
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Build a board from `[price, amount]` levels.
pub(crate) fn board_from_levels(
    bids: &[(NumStr, NumStr)],
    asks: &[(NumStr, NumStr)],
) -> Result<Board, ExchangeError> {
    let side = |levels: &[(NumStr, NumStr)], make: fn(f64, f64) -> BoardOrder| {
        levels
            .iter()
            .map(|(price, amount)| Ok(make(price.to_f64()?, amount.to_f64()?)))
            .collect::<Result<Vec<_>, ExchangeError>>()
    };
    Ok(Board::new(
        side(bids, BoardOrder::bid)?,
        side(asks, BoardOrder::ask)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_from_str() {
        assert_eq!("Huobi".parse::<Venue>().unwrap(), Venue::Huobi);
        assert_eq!(" KUCOIN ".parse::<Venue>().unwrap(), Venue::Kucoin);
        for venue in Venue::ALL {
            assert_eq!(venue.as_str().parse::<Venue>().unwrap(), venue);
        }
        assert!(matches!(
            "binance".parse::<Venue>(),
            Err(ExchangeError::UnknownVenue(name)) if name == "binance"
        ));
    }

    #[test]
    fn test_board_from_levels() {
        let board = board_from_levels(
            &[(NumStr::from("0.0000166"), NumStr::from("732.55"))],
            &[(NumStr::from("0.00001664"), NumStr::from("12"))],
        )
        .unwrap();
        assert_eq!(board.bids[0], BoardOrder::bid(0.0000166, 732.55));
        assert_eq!(board.asks[0].amount, 12.0);
    }
}
