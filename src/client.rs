//! Client construction: `ExchangeClientBuilder` and the `public_api` registry.
//!
//! Every adapter is built from the same [`AdapterContext`]; this module fills it
//! from builder options and dispatches on [`Venue`].

use crate::cache::fanout::DEFAULT_FAN_OUT_WORKERS;
use crate::cache::keyed::DEFAULT_BOARD_TTL;
use crate::cache::policy::DEFAULT_RATE_TTL;
use crate::cache::FanOut;
use crate::clock::{Clock, SystemClock};
use crate::depth::DepthSource;
use crate::error::ExchangeError;
use crate::exchange::PublicApi;
use crate::http::{Transport, VenueHttp};
use crate::venue::bitflyer::BitflyerApi;
use crate::venue::cobinhood::CobinhoodApi;
use crate::venue::huobi::HuobiApi;
use crate::venue::kucoin::KucoinApi;
use crate::venue::lbank::LbankApi;
use crate::venue::poloniex::PoloniexApi;
use crate::venue::{AdapterContext, Venue};

use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout of the built-in transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an adapter for `name` with default settings.
///
/// ```rust,ignore
/// let huobi = ccex_client::public_api("huobi")?;
/// let rate = huobi.rate("NAS", "ETH").await?;
/// ```
pub fn public_api(name: &str) -> Result<Arc<dyn PublicApi>, ExchangeError> {
    let venue: Venue = name.parse()?;
    ExchangeClientBuilder::new(venue).build()
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ExchangeClientBuilder {
    venue: Venue,
    base_url: Option<String>,
    rate_ttl: Duration,
    board_ttl: Duration,
    request_timeout: Duration,
    fan_out_workers: usize,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
    depth_source: Option<Arc<dyn DepthSource>>,
}

impl ExchangeClientBuilder {
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            base_url: None,
            rate_ttl: DEFAULT_RATE_TTL,
            board_ttl: DEFAULT_BOARD_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            fan_out_workers: DEFAULT_FAN_OUT_WORKERS,
            user_agent: None,
            transport: None,
            clock: None,
            depth_source: None,
        }
    }

    /// Override the venue's public API root.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// How long a rate/volume/tick snapshot stays fresh.
    pub fn rate_ttl(mut self, ttl: Duration) -> Self {
        self.rate_ttl = ttl;
        self
    }

    pub fn board_ttl(mut self, ttl: Duration) -> Self {
        self.board_ttl = ttl;
        self
    }

    /// Per-request timeout. Ignored when a custom transport is supplied.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Concurrent requests during per-pair refreshes.
    pub fn fan_out_workers(mut self, workers: usize) -> Self {
        self.fan_out_workers = workers;
        self
    }

    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Serve order book ticks from a consolidated depth feed where the venue
    /// supports it (Poloniex, Huobi, Kucoin).
    pub fn depth_source(mut self, source: Arc<dyn DepthSource>) -> Self {
        self.depth_source = Some(source);
        self
    }

    pub fn build(self) -> Result<Arc<dyn PublicApi>, ExchangeError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.request_timeout, self.user_agent.as_deref())?,
        };
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.venue.default_base_url().to_string());

        let ctx = AdapterContext {
            http: VenueHttp::new(&base_url, transport),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            rate_ttl: self.rate_ttl,
            board_ttl: self.board_ttl,
            fan_out: FanOut::new(self.fan_out_workers),
            depth_source: self.depth_source,
        };

        tracing::debug!(
            venue = %self.venue,
            base_url = %ctx.http.base_url(),
            rate_ttl_ms = self.rate_ttl.as_millis() as u64,
            "building public api"
        );

        let api: Arc<dyn PublicApi> = match self.venue {
            Venue::Bitflyer => Arc::new(BitflyerApi::new(ctx)),
            Venue::Poloniex => Arc::new(PoloniexApi::new(ctx)),
            Venue::Huobi => Arc::new(HuobiApi::new(ctx)),
            Venue::Kucoin => Arc::new(KucoinApi::new(ctx)),
            Venue::Lbank => Arc::new(LbankApi::new(ctx)),
            Venue::Cobinhood => Arc::new(CobinhoodApi::new(ctx)),
        };
        Ok(api)
    }
}

#[cfg(feature = "http")]
fn default_transport(
    timeout: Duration,
    user_agent: Option<&str>,
) -> Result<Arc<dyn Transport>, ExchangeError> {
    let transport = crate::http::ReqwestTransport::new(timeout, user_agent)?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(
    _timeout: Duration,
    _user_agent: Option<&str>,
) -> Result<Arc<dyn Transport>, ExchangeError> {
    Err(ExchangeError::Config(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::Request;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _request: &Request) -> Result<Vec<u8>, HttpError> {
            Err(HttpError::Connection("offline".into()))
        }
    }

    #[test]
    fn test_builds_every_venue() {
        for venue in Venue::ALL {
            let api = ExchangeClientBuilder::new(venue)
                .transport(Arc::new(Unreachable))
                .build()
                .unwrap();
            assert_eq!(api.venue(), venue);
        }
    }

    #[test]
    fn test_unknown_venue() {
        assert!(matches!(
            public_api("mtgox"),
            Err(ExchangeError::UnknownVenue(_))
        ));
    }

    #[tokio::test]
    async fn test_self_rate_needs_no_transport_call() {
        let api = ExchangeClientBuilder::new(Venue::Huobi)
            .transport(Arc::new(Unreachable))
            .build()
            .unwrap();
        assert_eq!(api.rate("eth", "ETH").await.unwrap(), 1.0);
        assert!(api.rate("NAS", "ETH").await.is_err());
    }
}
