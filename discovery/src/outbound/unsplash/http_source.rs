//! Reqwest-backed photo search source.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use super::dto::SearchResponseDto;
use crate::config::ApiCredential;
use crate::domain::ports::{PhotoHit, PhotoSearchRequest, PhotoSearchSource, UpstreamError};
use crate::outbound::http::{JsonFetcher, decode, endpoint};

const PROVIDER: &str = "unsplash";

/// Landscape photo search over Unsplash.
///
/// Deadlines come from each [`PhotoSearchRequest`], since image resolution
/// and galleries use different budgets.
pub struct UnsplashPhotoSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: Url,
    access_key: ApiCredential,
}

impl UnsplashPhotoSource {
    /// Build a source rooted at `base_url`, for example
    /// `https://api.unsplash.com`.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: Url, access_key: ApiCredential) -> Self {
        Self {
            fetcher,
            base_url,
            access_key,
        }
    }
}

#[async_trait]
impl PhotoSearchSource for UnsplashPhotoSource {
    async fn search_photos(
        &self,
        request: &PhotoSearchRequest,
    ) -> Result<Vec<PhotoHit>, UpstreamError> {
        let per_page = request.per_page.to_string();
        let url = endpoint(
            &self.base_url,
            &["search", "photos"],
            &[
                ("query", request.query.as_str()),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
                ("client_id", self.access_key.expose()),
            ],
        )?;
        let body = self.fetcher.fetch_json(url, request.timeout).await?;
        let response: SearchResponseDto = decode(body, PROVIDER)?;
        Ok(response.into_hits())
    }
}
