//! Poloniex: one `returnTicker` call covers every market.
//!
//! When a depth source is configured the tick map comes from its boards
//! instead of the ticker, refreshed on its own timestamp.

pub mod convert;
pub mod wire;

use crate::cache::{MarketSnapshot, OnceCache, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::shared::{Board, CurrencyPair, PrecisionMap, TickMap};
use crate::venue::{board_from_levels, AdapterContext, DepthTicks, Venue};
use async_trait::async_trait;
use std::sync::Arc;

use wire::{CurrenciesResponse, OrderBookResponse, TickerResponse};

pub struct PoloniexApi {
    http: VenueHttp,
    rates: TtlCache<MarketSnapshot>,
    precision: OnceCache<PrecisionMap>,
    depth: Option<DepthTicks>,
}

impl PoloniexApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            rates: TtlCache::new("poloniex_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            precision: OnceCache::new("poloniex_precision"),
            depth: DepthTicks::from_context(Venue::Poloniex, &ctx),
            http: ctx.http,
        }
    }

    fn command(name: &str) -> String {
        format!("/public?command={}", name)
    }

    async fn fetch_ticker(&self) -> Result<TickerResponse, ExchangeError> {
        self.http.get_json(&Self::command("returnTicker")).await
    }
}

#[async_trait]
impl PublicApi for PoloniexApi {
    fn venue(&self) -> Venue {
        Venue::Poloniex
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        Ok(self.snapshot().await?.pairs())
    }

    async fn snapshot(&self) -> Result<Arc<MarketSnapshot>, ExchangeError> {
        self.rates
            .get_or_refresh(|| async {
                let ticker = self.fetch_ticker().await?;
                convert::snapshot(&ticker)
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
        let path = format!(
            "{}&currencyPair={}",
            Self::command("returnOrderBook"),
            urlencoding::encode(&convert::market_param(trading, settlement))
        );
        let resp: OrderBookResponse = self.http.get_json(&path).await?;
        board_from_levels(&resp.bids, &resp.asks)
    }

    async fn precision_map(&self) -> Result<Arc<PrecisionMap>, ExchangeError> {
        self.precision
            .get_or_try_init(|| async {
                let ticker = self.fetch_ticker().await?;
                Ok::<_, ExchangeError>(convert::precision_map(&ticker))
            })
            .await
    }

    async fn frozen_currency(&self) -> Result<Vec<String>, ExchangeError> {
        let resp: CurrenciesResponse = self
            .http
            .get_json(&Self::command("returnCurrencies"))
            .await?;
        Ok(convert::frozen(&resp))
    }

    async fn clear_caches(&self) {
        self.rates.clear().await;
        self.precision.clear().await;
        if let Some(depth) = &self.depth {
            depth.clear().await;
        }
    }
}
