//! Pluggable GET transport.
//!
//! Adapters only ever issue unauthenticated GETs, so the seam is a single
//! method returning the raw response body. Tests substitute an in-memory
//! implementation; production uses [`ReqwestTransport`].

use crate::error::HttpError;
use async_trait::async_trait;

/// One outgoing GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return the body of a 2xx response.
    async fn get(&self, request: &Request) -> Result<Vec<u8>, HttpError>;
}

#[cfg(feature = "http")]
pub use reqwest_impl::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_impl {
    use super::{Request, Transport};
    use crate::error::HttpError;
    use async_trait::async_trait;
    use reqwest::Client;
    use std::time::Duration;

    /// reqwest-backed transport with a per-request timeout.
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self, HttpError> {
            let mut builder = Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(10);
            if let Some(ua) = user_agent {
                builder = builder.user_agent(ua.to_string());
            }
            Ok(Self {
                client: builder.build()?,
            })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn get(&self, request: &Request) -> Result<Vec<u8>, HttpError> {
            let mut req = self.client.get(&request.url);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }

            let resp = req.send().await.map_err(map_send_error)?;
            let status = resp.status();

            if status.is_success() {
                let bytes = resp.bytes().await?;
                return Ok(bytes.to_vec());
            }

            let retry_after_ms = resp
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));
            let body_text = resp.text().await.unwrap_or_default();

            Err(HttpError::from_status(
                status.as_u16(),
                body_text,
                retry_after_ms,
            ))
        }
    }

    fn map_send_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Reqwest(err)
        }
    }
}
