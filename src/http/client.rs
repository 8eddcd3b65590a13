//! Per-venue HTTP wrapper: base URL joining plus JSON decoding.

use crate::error::{ExchangeError, HttpError};
use crate::http::transport::{Request, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP handle owned by one venue adapter.
#[derive(Clone)]
pub struct VenueHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    headers: Vec<(String, String)>,
}

impl VenueHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            headers: Vec::new(),
        }
    }

    /// Attach a header sent with every request from this handle.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (leading slash, optional query) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, HttpError> {
        let mut request = Request::get(self.url(path));
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        tracing::debug!(url = %request.url, "GET");
        self.transport.get(&request).await
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ExchangeError> {
        let body = self.get_bytes(path).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(path, error = %e, "response did not match expected shape");
            ExchangeError::Parse(format!("{}: {}", path, e))
        })
    }
}

impl std::fmt::Debug for VenueHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VenueHttp")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Echo {
        seen: Mutex<Vec<Request>>,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for Echo {
        async fn get(&self, request: &Request) -> Result<Vec<u8>, HttpError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.body.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_joins_url_and_forwards_headers() {
        let echo = Arc::new(Echo {
            seen: Mutex::new(Vec::new()),
            body: r#"{"x":1}"#,
        });
        let http = VenueHttp::new("https://api.example.com/v1/", echo.clone())
            .with_header("User-Agent", "test");

        let value: serde_json::Value = http.get_json("/ticker?a=b").await.unwrap();
        assert_eq!(value["x"], 1);

        let seen = echo.seen.lock().unwrap();
        assert_eq!(seen[0].url, "https://api.example.com/v1/ticker?a=b");
        assert_eq!(
            seen[0].headers,
            vec![("User-Agent".to_string(), "test".to_string())]
        );
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_parse_error() {
        let echo = Arc::new(Echo {
            seen: Mutex::new(Vec::new()),
            body: "not json",
        });
        let http = VenueHttp::new("https://api.example.com", echo);
        let err = http.get_json::<serde_json::Value>("/x").await.unwrap_err();
        assert!(matches!(err, ExchangeError::Parse(_)));
    }
}
