//! Bitflyer: a single `/ticker` call feeds the whole snapshot.

pub mod convert;
pub mod wire;

use crate::cache::{MarketSnapshot, OnceCache, TtlCache};
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::VenueHttp;
use crate::shared::{Board, CurrencyPair, PrecisionMap};
use crate::venue::{AdapterContext, Venue};
use async_trait::async_trait;
use std::sync::Arc;

use wire::{BoardResponse, TickerResponse};

pub struct BitflyerApi {
    http: VenueHttp,
    rates: TtlCache<MarketSnapshot>,
    precision: OnceCache<PrecisionMap>,
}

impl BitflyerApi {
    pub fn new(ctx: AdapterContext) -> Self {
        Self {
            rates: TtlCache::new("bitflyer_rates", ctx.rate_policy(), Arc::clone(&ctx.clock)),
            precision: OnceCache::new("bitflyer_precision"),
            http: ctx.http,
        }
    }

    async fn fetch_snapshot(&self) -> Result<MarketSnapshot, ExchangeError> {
        let ticker: TickerResponse = self.http.get_json("/ticker").await?;
        convert::snapshot(&ticker)
    }
}

#[async_trait]
impl PublicApi for BitflyerApi {
    fn venue(&self) -> Venue {
        Venue::Bitflyer
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>, ExchangeError> {
        Ok(self.snapshot().await?.pairs())
    }

    async fn snapshot(&self) -> Result<Arc<MarketSnapshot>, ExchangeError> {
        self.rates.get_or_refresh(|| self.fetch_snapshot()).await
    }

    async fn board(&self, trading: &str, settlement: &str) -> Result<Board, ExchangeError> {
        let path = format!(
            "/board?product_code={}_{}",
            urlencoding::encode(&trading.to_uppercase()),
            urlencoding::encode(&settlement.to_uppercase())
        );
        let resp: BoardResponse = self.http.get_json(&path).await?;
        convert::board(&resp)
    }

    async fn precision_map(&self) -> Result<Arc<PrecisionMap>, ExchangeError> {
        self.precision
            .get_or_try_init(|| async {
                let ticker: TickerResponse = self.http.get_json("/ticker").await?;
                convert::precision_map(&ticker)
            })
            .await
    }

    async fn frozen_currency(&self) -> Result<Vec<String>, ExchangeError> {
        Ok(Vec::new())
    }

    async fn clear_caches(&self) {
        self.rates.clear().await;
        self.precision.clear().await;
    }
}
