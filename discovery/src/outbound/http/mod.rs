//! Bounded JSON-over-HTTP fetching shared by every provider adapter.

mod fetcher;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ports::UpstreamError;

pub use fetcher::ReqwestJsonFetcher;

/// Issues one GET per call and decodes the body as JSON.
///
/// Implementations cancel the request once `timeout` elapses and report
/// it as [`UpstreamError::Timeout`]; non-2xx answers become
/// [`UpstreamError::HttpStatus`] and undecodable bodies
/// [`UpstreamError::Parse`]. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetch `url` and parse the body.
    async fn fetch_json(&self, url: Url, timeout: Duration) -> Result<Value, UpstreamError>;
}

/// Append path `segments` and `query` pairs to a provider base URL.
pub(crate) fn endpoint(
    base: &Url,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| UpstreamError::transport(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Decode an already-parsed JSON value into a provider DTO.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, provider: &str) -> Result<T, UpstreamError> {
    serde_json::from_value(value)
        .map_err(|error| UpstreamError::parse(format!("unexpected {provider} payload: {error}")))
}
