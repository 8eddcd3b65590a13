//! Cobinhood: one `/v1/market/tickers` call per refresh. The pair list is
//! refreshed weekly rather than fetched once.

pub mod convert;
pub mod wire;

use crate::cache::{MarketSnapshot, OnceCache, RefreshPolicy, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::shared::{Board, CurrencyPair, PrecisionMap};
use crate::venue::{AdapterContext, Venue};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use wire::{Currencies, Envelope, OrderBookResult, Tickers, TradingPairs};

/// Lifetime of the cached pair list.
pub const PAIRS_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub struct CobinhoodApi {
    http: VenueHttp,
    pairs: TtlCache<Vec<CurrencyPair>>,
    rates: TtlCache<MarketSnapshot>,
    precision: OnceCache<PrecisionMap>,
}

impl CobinhoodApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            pairs: TtlCache::new(
                "cobinhood_pairs",
                RefreshPolicy::new(PAIRS_TTL),
                Arc::clone(&ctx.clock),
            ),
            rates: TtlCache::new("cobinhood_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            precision: OnceCache::new("cobinhood_precision"),
            http: ctx.http,
        }
    }

    async fn fetch_tickers(&self) -> Result<Tickers, ExchangeError> {
        let resp: Envelope<Tickers> = self.http.get_json("/v1/market/tickers").await?;
        resp.into_result()
    }
}

#[async_trait]
impl PublicApi for CobinhoodApi {
    fn venue(&self) -> Venue {
        Venue::Cobinhood
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        let pairs = self
            .pairs
            .get_or_refresh(|| async {
                let resp: Envelope<TradingPairs> =
                    self.http.get_json("/v1/market/trading_pairs").await?;
                Ok::<_, ExchangeError>(convert::pairs(&resp.into_result()?))
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

    async fn board(&self, trading: &str, settlement: &str) -> Result<Board, ExchangeError> {
        let pair = CurrencyPair::new(trading, settlement);
        let path = format!(
            "/v1/market/orderbooks/{}?limit=10000",
            urlencoding::encode(&convert::market_id(&pair))
        );
        let resp: Envelope<OrderBookResult> = self.http.get_json(&path).await?;
        convert::board(&resp.into_result()?.orderbook)
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
        let resp: Envelope<Currencies> = self.http.get_json("/v1/market/currencies").await?;
        Ok(convert::frozen(&resp.into_result()?.currencies))
    }

    async fn clear_caches(&self) {
        self.pairs.clear().await;
        self.rates.clear().await;
        self.precision.clear().await;
    }
}
