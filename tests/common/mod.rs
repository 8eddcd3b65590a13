//! In-memory transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ccex_client::clock::ManualClock;
use ccex_client::http::{Request, Transport};
use ccex_client::{ExchangeClientBuilder, HttpError, PublicApi, Venue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Reply {
    Body(String),
    Status(u16),
    Fail,
}

struct Route {
    needle: String,
    reply: Reply,
    calls: Arc<AtomicUsize>,
}

/// Serves canned bodies for URLs containing a registered substring.
/// Routes are matched in registration order; unmatched URLs get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<Request>>,
    delay: Mutex<Option<Duration>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn add(&self, needle: &str, reply: Reply) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        self.routes.lock().unwrap().push(Route {
            needle: needle.to_string(),
            reply,
            calls: Arc::clone(&calls),
        });
        calls
    }

    /// Register a JSON body; returns the route's call counter.
    pub fn route(&self, needle: &str, body: &str) -> Arc<AtomicUsize> {
        self.add(needle, Reply::Body(body.to_string()))
    }

    pub fn route_status(&self, needle: &str, status: u16) -> Arc<AtomicUsize> {
        self.add(needle, Reply::Status(status))
    }

    pub fn route_failure(&self, needle: &str) -> Arc<AtomicUsize> {
        self.add(needle, Reply::Fail)
    }

    /// Replace the reply of an existing route, keeping its counter.
    pub fn set_body(&self, needle: &str, body: &str) {
        let mut routes = self.routes.lock().unwrap();
        let route = routes
            .iter_mut()
            .find(|r| r.needle == needle)
            .expect("route registered");
        route.reply = Reply::Body(body.to_string());
    }

    pub fn set_failure(&self, needle: &str) {
        let mut routes = self.routes.lock().unwrap();
        let route = routes
            .iter_mut()
            .find(|r| r.needle == needle)
            .expect("route registered");
        route.reply = Reply::Fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, request: &Request) -> Result<Vec<u8>, HttpError> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let routes = self.routes.lock().unwrap();
        let Some(route) = routes.iter().find(|r| request.url.contains(&r.needle)) else {
            return Err(HttpError::NotFound(request.url.clone()));
        };
        route.calls.fetch_add(1, Ordering::SeqCst);
        match &route.reply {
            Reply::Body(body) => Ok(body.as_bytes().to_vec()),
            Reply::Status(status) => Err(HttpError::from_status(*status, String::new(), None)),
            Reply::Fail => Err(HttpError::Connection("connection reset".into())),
        }
    }
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Adapter wired to `transport` and a manual clock, 3 s rate TTL.
pub fn api(
    venue: Venue,
    transport: &Arc<FakeTransport>,
) -> (Arc<dyn PublicApi>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let api = ExchangeClientBuilder::new(venue)
        .base_url("https://fake.test")
        .transport(transport.clone())
        .clock(clock.clone())
        .build()
        .unwrap();
    (api, clock)
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub const BITFLYER_TICKER: &str = r#"{"product_code":"BTC_JPY","timestamp":"2015-07-08T02:50:59.97","tick_id":3579,"best_bid":30000,"best_ask":36640,"best_bid_size":0.1,"best_ask_size":5,"total_bid_depth":15.13,"total_ask_depth":20,"ltp":31690,"volume":16819.26,"volume_by_product":6819.26}"#;

pub const POLONIEX_TICKER: &str = r#"{"BTC_BCN":{"id":7,"last":"0.00000044","lowestAsk":"0.00000045","highestBid":"0.00000044","percentChange":"0.02325581","baseVolume":"29.09099079","quoteVolume":"67186014.01","isFrozen":"0"},"BTC_ETH":{"id":148,"last":"0.07445","lowestAsk":"0.07446","highestBid":"0.07440","baseVolume":"1520.4","quoteVolume":"20412.1","isFrozen":"0"}}"#;

pub const HUOBI_SYMBOLS: &str = r#"{"status":"ok","data":[{"base-currency":"nas","quote-currency":"eth","price-precision":6,"amount-precision":4,"symbol-partition":"innovation"},{"base-currency":"eth","quote-currency":"btc","price-precision":6,"amount-precision":4,"symbol-partition":"main"},{"base-currency":"ltc","quote-currency":"btc","price-precision":6,"amount-precision":4,"symbol-partition":"main"}]}"#;

pub const HUOBI_NASETH: &str = r#"{"status":"ok","ch":"market.naseth.detail.merged","ts":1525320427426,"tick":{"amount":291891.3255,"open":0.008606,"close":0.008959,"high":0.009143,"id":3378406547,"count":3313,"low":0.008522,"version":3378406547,"ask":[0.008959,13.5],"vol":2618.884466247149233010811750000000000000,"bid":[0.008934,5.6]}}"#;

pub const HUOBI_ETHBTC: &str = r#"{"status":"ok","tick":{"close":0.0745,"vol":812.5,"ask":[0.0746,2.0],"bid":[0.0744,1.5]}}"#;

pub const KUCOIN_TICKERS: &str = r#"{"code":"200000","data":{"time":1550653727731,"ticker":[{"symbol":"ETH-BTC","symbolName":"ETH-BTC","buy":"0.04033864","sell":"0.040339","changeRate":"0.0159","high":"0.0404","low":"0.03962135","vol":"45161.5073","volValue":"1814.21","last":"0.04033865"}]}}"#;

pub const LBANK_TICKERS: &str = r#"[{"symbol":"eth_btc","timestamp":"1410431279000","ticker":{"change":4.21,"high":7722.58,"latest":7682.29,"low":7348.30,"turnover":0.0,"vol":1316.3235}}]"#;

pub const COBINHOOD_TICKERS: &str = r#"{"success":true,"result":{"tickers":[{"trading_pair_id":"ETH-BTC","24h_volume":"3297.3482","last_trade_price":"0.074538","highest_bid":"0.07445","lowest_ask":"0.074536"}]}}"#;
