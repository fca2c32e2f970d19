//! Upstream REST client.
//!
//! # Responsibilities
//! - Build method URLs with the process-wide API key
//! - Perform the GET and read the body
//! - Turn non-2xx, transport, parse and shape failures into `UpstreamError`
//!
//! # Design Decisions
//! - No timeout and no retry: a call succeeds, fails, or hangs
//! - The `stat` field in the payload is not inspected; a failed call that
//!   still returns 200 surfaces as a shape error
//! - The API key never appears in logs

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::error::{UpstreamError, UpstreamResult};
use crate::upstream::request::{method_url, strip_jsonp, FlickrMethod};

/// Client for the upstream photo API. Cheap to clone.
#[derive(Clone)]
pub struct FlickrClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Arc<str>,
}

impl std::fmt::Debug for FlickrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlickrClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FlickrClient {
    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        config: &UpstreamConfig,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            api_key: Arc::from(config.api_key.as_str()),
        })
    }

    /// Call `method` and deserialize the body into `T`.
    pub async fn call<T>(&self, method: FlickrMethod, params: &[(&str, &str)]) -> UpstreamResult<T>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        tracing::debug!(method = %method, params = ?params, "Calling upstream");

        let result = self
            .fetch_json(method_url(&self.base_url, &self.api_key, method, params))
            .await
            .and_then(|value| {
                serde_json::from_value(value).map_err(|source| UpstreamError::UnexpectedShape {
                    method: method.as_str(),
                    source,
                })
            });

        metrics::record_upstream_call(method.as_str(), result.is_ok(), start);

        if let Err(e) = &result {
            tracing::warn!(method = %method, error = %e, "Upstream call failed");
        }
        result
    }

    /// GET `url` and parse the body as JSON.
    async fn fetch_json(&self, url: Url) -> UpstreamResult<serde_json::Value> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        serde_json::from_str(strip_jsonp(&body)).map_err(UpstreamError::Parse)
    }
}
