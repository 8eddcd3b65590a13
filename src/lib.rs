//! # ccex-client
//!
//! Unified public market-data client for cryptocurrency exchanges.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: shared types (pairs, ticks, boards, precision), errors, clock
//! 2. **HTTP**: pluggable `Transport` with a reqwest default behind the `http` feature
//! 3. **Caching**: TTL snapshots, fetch-once cells, per-key board cache, bounded fan-out
//! 4. **Venues**: one adapter per exchange implementing `PublicApi`
//! 5. **Client**: `ExchangeClientBuilder` and the `public_api(name)` registry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ccex_client::prelude::*;
//! use std::time::Duration;
//!
//! let bitflyer = public_api("bitflyer")?;
//! let rate = bitflyer.rate("BTC", "JPY").await?;
//!
//! let huobi = ExchangeClientBuilder::new(Venue::Huobi)
//!     .rate_ttl(Duration::from_secs(30))
//!     .fan_out_workers(5)
//!     .build()?;
//! let ticks = huobi.order_book_tick_map().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared market-data types.
pub mod shared;

/// Unified client error types.
pub mod error;

/// Public REST base URLs.
pub mod network;

/// Injectable monotonic clock.
pub mod clock;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Transport seam and per-venue JSON client.
pub mod http;

// ── Layer 3: Caching ─────────────────────────────────────────────────────────

/// TTL and fetch-once caches, snapshots, fan-out.
pub mod cache;

/// Consolidated order book feed seam.
pub mod depth;

// ── Layer 4: Venues ──────────────────────────────────────────────────────────

/// The `PublicApi` capability trait.
pub mod exchange;

/// Per-exchange adapters.
pub mod venue;

// ── Layer 5: Client ──────────────────────────────────────────────────────────

/// Builder and name registry.
pub mod client;

pub use client::{public_api, ExchangeClientBuilder};
pub use error::{ExchangeError, HttpError};
pub use exchange::PublicApi;
pub use venue::Venue;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{
        Board, BoardError, BoardOrder, CurrencyPair, OrderBookTick, Precision, PrecisionMap,
        RateMap, Side, TickMap, VolumeMap,
    };

    // Errors
    pub use crate::error::{ExchangeError, HttpError};

    // Caching
    pub use crate::cache::MarketSnapshot;
    pub use crate::clock::{Clock, ManualClock, SystemClock};

    // Seams
    pub use crate::depth::DepthSource;
    pub use crate::http::{Request, Transport};

    // Client
    pub use crate::client::{public_api, ExchangeClientBuilder};
    pub use crate::exchange::PublicApi;
    pub use crate::venue::Venue;
}
