//! Lbank: one `ticker.do?symbol=all` call per refresh. Lbank publishes no
//! best bid/ask in its ticker, so the tick map is unsupported.

pub mod convert;
pub mod wire;

use crate::cache::{KeyedTtlCache, MarketSnapshot, OnceCache, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::shared::{Board, CurrencyPair, PrecisionMap, TickMap};
use crate::venue::{board_from_levels, AdapterContext, Venue};
use async_trait::async_trait;
use std::sync::Arc;

use wire::{DepthResponse, TickerEntry, WithdrawConfig};

pub struct LbankApi {
    http: VenueHttp,
    pairs: OnceCache<Vec<CurrencyPair>>,
    rates: TtlCache<MarketSnapshot>,
    precision: OnceCache<PrecisionMap>,
    boards: KeyedTtlCache<CurrencyPair, Board>,
}

impl LbankApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            pairs: OnceCache::new("lbank_pairs"),
            rates: TtlCache::new("lbank_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            precision: OnceCache::new("lbank_precision"),
            boards: KeyedTtlCache::new(ctx.board_ttl, Arc::clone(&ctx.clock)),
            http: ctx.http,
        }
    }

    async fn fetch_tickers(&self) -> Result<Vec<TickerEntry>, ExchangeError> {
        self.http.get_json("/v1/ticker.do?symbol=all").await
    }
}

#[async_trait]
impl PublicApi for LbankApi {
    fn venue(&self) -> Venue {
        Venue::Lbank
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        let pairs = self
            .pairs
            .get_or_try_init(|| async {
                let symbols: Vec<String> = self.http.get_json("/v1/currencyPairs.do").await?;
                Ok::<_, ExchangeError>(convert::pairs(&symbols))
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
        Err(ExchangeError::Unsupported {
            venue: Venue::Lbank.as_str(),
            operation: "order_book_tick_map",
        })
    }

    async fn board(&self, trading: &str, settlement: &str) -> Result<Board, ExchangeError> {
        let pair = CurrencyPair::new(trading, settlement);
        if let Some(board) = self.boards.get(&pair).await {
            return Ok((*board).clone());
        }
        let path = format!(
            "/v1/depth.do?size=60&symbol={}",
            urlencoding::encode(&convert::symbol(&pair))
        );
        let resp: DepthResponse = self.http.get_json(&path).await?;
        let board = board_from_levels(&resp.bids, &resp.asks)?;
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
        let configs: Vec<WithdrawConfig> = self.http.get_json("/v1/withdrawConfigs.do").await?;
        Ok(convert::frozen(&configs))
    }

    async fn clear_caches(&self) {
        self.pairs.clear().await;
        self.rates.clear().await;
        self.precision.clear().await;
        self.boards.clear().await;
    }
}
