//! Port for keyword photo search.

use std::time::Duration;

use async_trait::async_trait;

use super::UpstreamError;

/// A single keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSearchRequest {
    /// Free-text query.
    pub query: String,
    /// Maximum number of results wanted.
    pub per_page: u32,
    /// Deadline for this request alone.
    pub timeout: Duration,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoHit {
    /// Provider photo id.
    pub id: String,
    /// Uncropped display URL, which may already carry query parameters.
    pub regular_url: String,
    /// Provider alt text.
    pub alt_description: Option<String>,
    /// Photographer display name.
    pub photographer_name: String,
    /// Photographer profile page.
    pub photographer_url: String,
    /// Dominant colour.
    pub color: Option<String>,
}

/// Keyword photo search, landscape orientation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoSearchSource: Send + Sync {
    /// Run one search; an empty vector means the provider found nothing.
    async fn search_photos(
        &self,
        request: &PhotoSearchRequest,
    ) -> Result<Vec<PhotoHit>, UpstreamError>;
}
