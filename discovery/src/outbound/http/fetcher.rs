//! Reqwest-backed [`JsonFetcher`].
//!
//! Transport details only: per-request deadline, status mapping, and JSON
//! decoding. Provider adapters build URLs and interpret payloads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::JsonFetcher;
use crate::domain::ports::UpstreamError;

const DEFAULT_USER_AGENT: &str = "discovery/0.1";

/// JSON fetcher sharing one connection pool across providers.
#[derive(Debug, Clone)]
pub struct ReqwestJsonFetcher {
    client: Client,
}

impl ReqwestJsonFetcher {
    /// Build a fetcher with its own client.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for ReqwestJsonFetcher {
    async fn fetch_json(&self, url: Url, timeout: Duration) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|error| map_transport_error(&error, timeout))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error, timeout))?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|error| UpstreamError::parse(format!("invalid JSON payload: {error}")))
    }
}

fn map_transport_error(error: &reqwest::Error, timeout: Duration) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::timeout(format!("no response within {}ms", timeout.as_millis()))
    } else if error.is_decode() {
        UpstreamError::parse(error.to_string())
    } else {
        UpstreamError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamError {
    debug!(
        status = status.as_u16(),
        body = %body_preview(body),
        "upstream returned non-success status"
    );
    UpstreamError::http_status(status.as_u16())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
