//! HTTP layer: pluggable transport and per-venue JSON client.

pub mod client;
pub mod transport;

pub use client::VenueHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Request, Transport};
