//! Reqwest-backed places source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::dto::FeatureCollectionDto;
use crate::config::ApiCredential;
use crate::domain::ports::{PlaceHit, PlacesRequest, PlacesSource, UpstreamError};
use crate::outbound::http::{JsonFetcher, decode, endpoint};

const PROVIDER: &str = "opentripmap";

/// Radius search over OpenTripMap.
pub struct OpenTripMapPlacesSource {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: Url,
    api_key: ApiCredential,
    timeout: Duration,
}

impl OpenTripMapPlacesSource {
    /// Build a source rooted at `base_url`, for example
    /// `https://api.opentripmap.com/0.1/en`.
    pub fn new(
        fetcher: Arc<dyn JsonFetcher>,
        base_url: Url,
        api_key: ApiCredential,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl PlacesSource for OpenTripMapPlacesSource {
    async fn places_within(&self, request: &PlacesRequest) -> Result<Vec<PlaceHit>, UpstreamError> {
        let radius = request.radius_metres.to_string();
        let longitude = request.centre.longitude.to_string();
        let latitude = request.centre.latitude.to_string();
        let url = endpoint(
            &self.base_url,
            &["places", "radius"],
            &[
                ("radius", radius.as_str()),
                ("lon", longitude.as_str()),
                ("lat", latitude.as_str()),
                ("format", "json"),
                ("apikey", self.api_key.expose()),
            ],
        )?;
        let body = self.fetcher.fetch_json(url, self.timeout).await?;
        let collection: FeatureCollectionDto = decode(body, PROVIDER)?;
        Ok(collection.into_hits())
    }
}
