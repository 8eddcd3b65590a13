//! Kucoin: one `allTickers` call per refresh.
//!
//! Kucoin rejects requests without a browser user agent, so every request from
//! this adapter carries one.

pub mod convert;
pub mod wire;

use crate::cache::{KeyedTtlCache, MarketSnapshot, OnceCache, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::network::BROWSER_USER_AGENT;
use crate::shared::{Board, CurrencyPair, PrecisionMap, TickMap};
use crate::venue::{board_from_levels, AdapterContext, DepthTicks, Venue};
use async_trait::async_trait;
use std::sync::Arc;

use wire::{AllTickers, CurrencyEntry, Envelope, OrderBook, SymbolEntry};

pub struct KucoinApi {
    http: VenueHttp,
    pairs: OnceCache<Vec<CurrencyPair>>,
    rates: TtlCache<MarketSnapshot>,
    precision: OnceCache<PrecisionMap>,
    boards: KeyedTtlCache<CurrencyPair, Board>,
    depth: Option<DepthTicks>,
}

impl KucoinApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            pairs: OnceCache::new("kucoin_pairs"),
            rates: TtlCache::new("kucoin_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            precision: OnceCache::new("kucoin_precision"),
            boards: KeyedTtlCache::new(ctx.board_ttl, Arc::clone(&ctx.clock)),
            depth: DepthTicks::from_context(Venue::Kucoin, &ctx),
            http: ctx.http.with_header("User-Agent", BROWSER_USER_AGENT),
        }
    }

    async fn fetch_tickers(&self) -> Result<AllTickers, ExchangeError> {
        let resp: Envelope<AllTickers> = self.http.get_json("/api/v1/market/allTickers").await?;
        Ok(resp.data)
    }
}

#[async_trait]
impl PublicApi for KucoinApi {
    fn venue(&self) -> Venue {
        Venue::Kucoin
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        let pairs = self
            .pairs
            .get_or_try_init(|| async {
                let resp: Envelope<Vec<SymbolEntry>> =
                    self.http.get_json("/api/v1/symbols").await?;
                Ok::<_, ExchangeError>(convert::pairs(&resp.data))
            })
            .await?;
        Ok((*pairs).clone())
    }

    async fn snapshot(&self) -> Result<Arc<MarketSnapshot>, ExchangeError> {
        self.rates
            .get_or_refresh(|| async {
                let tickers = self.fetch_tickers().await?;
                convert::snapshot(&tickers)
            })
            .await
    }

    async fn order_book_tick_map(&self) -> Result<TickMap, ExchangeError> {
        match &self.depth {
            Some(depth) => depth.ticks().await,
            None => Ok(self.snapshot().await?.ticks.clone()),
        }
    }

    async fn board(&self, trading: &str, settlement: &str) -> Result<Board, ExchangeError> {
        let pair = CurrencyPair::new(trading, settlement);
        if let Some(board) = self.boards.get(&pair).await {
            return Ok((*board).clone());
        }
        let path = format!(
            "/api/v2/market/orderbook/level2?symbol={}",
            urlencoding::encode(&convert::symbol(&pair))
        );
        let resp: Envelope<OrderBook> = self.http.get_json(&path).await?;
        let board = board_from_levels(&resp.data.bids, &resp.data.asks)?;
        Ok((*self.boards.insert(pair, board).await).clone())
    }

    async fn precision_map(&self) -> Result<Arc<PrecisionMap>, ExchangeError> {
        self.precision
            .get_or_try_init(|| async {
                let tickers = self.fetch_tickers().await?;
                Ok::<_, ExchangeError>(convert::precision_map(&tickers))
            })
            .await
    }

    async fn frozen_currency(&self) -> Result<Vec<String>, ExchangeError> {
        let resp: Envelope<Vec<CurrencyEntry>> = self.http.get_json("/api/v1/currencies").await?;
        Ok(convert::frozen(&resp.data))
    }

    async fn clear_caches(&self) {
        self.pairs.clear().await;
        self.rates.clear().await;
        self.precision.clear().await;
        self.boards.clear().await;
        if let Some(depth) = &self.depth {
            depth.clear().await;
        }
    }
}
