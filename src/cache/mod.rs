//! Caching core shared by every venue adapter.
//!
//! - [`TtlCache`]: lazily refreshed value with at most one fetch per stale window
//! - [`OnceCache`]: fetch-once value (pair lists, precision maps)
//! - [`KeyedTtlCache`]: short-lived per-key entries (full boards)
//! - [`MarketSnapshot`]: rates, volumes and ticks from a single refresh
//! - [`FanOut`]: bounded concurrent per-pair fetching

pub mod fanout;
pub mod keyed;
pub mod once;
pub mod policy;
pub mod snapshot;
pub mod store;

pub use fanout::FanOut;
pub use keyed::KeyedTtlCache;
pub use once::OnceCache;
pub use policy::RefreshPolicy;
pub use snapshot::{MarketSnapshot, SnapshotBuilder};
pub use store::TtlCache;
