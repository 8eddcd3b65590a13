//! Huobi: per-pair tickers fetched concurrently.
//!
//! The pair list comes from the symbols endpoint and is fetched once. Each
//! refresh then requests `/market/detail/merged` for every pair through a
//! bounded [`FanOut`]; pairs that fail are logged and left out of the
//! snapshot. Failing to load the pair list, or every pair failing, fails the
//! whole refresh.

pub mod convert;
pub mod wire;

use crate::cache::{FanOut, KeyedTtlCache, MarketSnapshot, OnceCache, SnapshotBuilder, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::shared::{Board, CurrencyPair, PrecisionMap, TickMap};
use crate::venue::{board_from_levels, AdapterContext, DepthTicks, Venue};
use async_trait::async_trait;
use std::sync::Arc;

use convert::SymbolTable;
use wire::{CurrenciesResponse, DepthResponse, MergedResponse, SymbolsResponse};

pub struct HuobiApi {
    http: VenueHttp,
    fan_out: FanOut,
    symbols: OnceCache<SymbolTable>,
    rates: TtlCache<MarketSnapshot>,
    boards: KeyedTtlCache<CurrencyPair, Board>,
    depth: Option<DepthTicks>,
}

impl HuobiApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            fan_out: ctx.fan_out.clone(),
            symbols: OnceCache::new("huobi_symbols"),
            rates: TtlCache::new("huobi_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            boards: KeyedTtlCache::new(ctx.board_ttl, Arc::clone(&ctx.clock)),
            depth: DepthTicks::from_context(Venue::Huobi, &ctx),
            http: ctx.http,
        }
    }

    async fn symbol_table(&self) -> Result<Arc<SymbolTable>, ExchangeError> {
        self.symbols
            .get_or_try_init(|| async {
                let resp: SymbolsResponse = self.http.get_json("/v1/common/symbols").await?;
                Ok::<_, ExchangeError>(convert::symbol_table(&resp))
            })
            .await
    }

    async fn fetch_snapshot(&self) -> Result<MarketSnapshot, ExchangeError> {
        let pairs = self.symbol_table().await?.pairs.clone();
        let requested = pairs.len();

        let http = self.http.clone();
        let quotes = self
            .fan_out
            .collect(pairs, move |pair| {
                let http = http.clone();
                async move {
                    let path = format!("/market/detail/merged?symbol={}", convert::symbol(&pair));
                    let resp: MergedResponse = http.get_json(&path).await?;
                    convert::quote(&resp)
                }
            })
            .await;
        if quotes.is_empty() && requested > 0 {
            return Err(ExchangeError::Upstream(format!(
                "huobi: all {} ticker requests failed",
                requested
            )));
        }

        let mut builder = SnapshotBuilder::default();
        for (pair, quote) in &quotes {
            builder
                .insert_rate(pair, quote.rate)
                .insert_volume(pair, quote.volume);
            if let Some(tick) = quote.tick {
                builder.insert_tick(pair, tick);
            }
        }
        Ok(builder.build())
    }
}

#[async_trait]
impl PublicApi for HuobiApi {
    fn venue(&self) -> Venue {
        Venue::Huobi
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        Ok(self.symbol_table().await?.pairs.clone())
    }

    async fn snapshot(&self) -> Result<Arc<MarketSnapshot>, ExchangeError> {
        self.rates.get_or_refresh(|| self.fetch_snapshot()).await
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
            "/market/depth?symbol={}&type=step0",
            urlencoding::encode(&convert::symbol(&pair))
        );
        let resp: DepthResponse = self.http.get_json(&path).await?;
        let board = board_from_levels(&resp.tick.bids, &resp.tick.asks)?;
        Ok((*self.boards.insert(pair, board).await).clone())
    }

    async fn precision_map(&self) -> Result<Arc<PrecisionMap>, ExchangeError> {
        Ok(Arc::new(self.symbol_table().await?.precision.clone()))
    }

    async fn frozen_currency(&self) -> Result<Vec<String>, ExchangeError> {
        let resp: CurrenciesResponse = self
            .http
            .get_json("/v1/settings/currencys?language=en-US")
            .await?;
        Ok(convert::frozen(&resp))
    }

    async fn clear_caches(&self) {
        self.symbols.clear().await;
        self.rates.clear().await;
        self.boards.clear().await;
        if let Some(depth) = &self.depth {
            depth.clear().await;
        }
    }
}
