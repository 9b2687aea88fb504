//! Wires [`DiscoverySettings`] into a ready [`TravelDiscovery`].

use std::sync::Arc;

use seed_catalogue::{Catalogue, CatalogueError};
use tracing::info;
use url::Url;

use crate::config::DiscoverySettings;
use crate::domain::{DiscoveryPorts, DiscoveryRuntime, TravelDiscovery};
use crate::outbound::cache::InMemoryImageCache;
use crate::outbound::http::{JsonFetcher, ReqwestJsonFetcher};
use crate::outbound::openweather::OpenWeatherSource;
use crate::outbound::opentripmap::OpenTripMapPlacesSource;
use crate::outbound::rest_countries::RestCountriesSource;
use crate::outbound::unsplash::UnsplashPhotoSource;

/// Errors raised while assembling the service.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// A configured base URL is not an absolute hierarchical URL.
    #[error("invalid {setting} base URL {value:?}: {reason}")]
    InvalidBaseUrl {
        /// Setting that held the value.
        setting: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// The bundled catalogue failed validation.
    #[error("bundled catalogue is invalid: {0}")]
    Catalogue(#[from] CatalogueError),
}

/// Build the facade with reqwest adapters, the bundled catalogue, a fresh
/// in-memory image cache, and thread-local randomness.
///
/// # Errors
///
/// Returns [`BootstrapError`] when a base URL is malformed, the HTTP client
/// cannot be constructed, or the bundled catalogue is corrupt.
pub fn build_discovery(settings: &DiscoverySettings) -> Result<TravelDiscovery, BootstrapError> {
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(ReqwestJsonFetcher::new()?);
    build_discovery_with_fetcher(settings, fetcher)
}

/// As [`build_discovery`], over an explicit fetcher.
///
/// # Errors
///
/// Returns [`BootstrapError`] when a base URL is malformed or the bundled
/// catalogue is corrupt.
pub fn build_discovery_with_fetcher(
    settings: &DiscoverySettings,
    fetcher: Arc<dyn JsonFetcher>,
) -> Result<TravelDiscovery, BootstrapError> {
    let catalogue = Arc::new(Catalogue::bundled()?);
    let request_timeout = settings.request_timeout();

    let countries = Arc::new(RestCountriesSource::new(
        Arc::clone(&fetcher),
        parse_base_url("rest_countries", settings.rest_countries_base_url())?,
        request_timeout,
    ));
    let mut ports = DiscoveryPorts::new(countries);

    if let Some(key) = settings.openweather_credential() {
        ports = ports.with_weather(Arc::new(OpenWeatherSource::new(
            Arc::clone(&fetcher),
            parse_base_url("openweather", settings.openweather_base_url())?,
            key,
            request_timeout,
        )));
    }
    if let Some(key) = settings.unsplash_credential() {
        ports = ports.with_photos(Arc::new(UnsplashPhotoSource::new(
            Arc::clone(&fetcher),
            parse_base_url("unsplash", settings.unsplash_base_url())?,
            key,
        )));
    }
    if let Some(key) = settings.opentripmap_credential() {
        ports = ports.with_places(Arc::new(OpenTripMapPlacesSource::new(
            Arc::clone(&fetcher),
            parse_base_url("opentripmap", settings.opentripmap_base_url())?,
            key,
            request_timeout,
        )));
    }

    info!(
        weather = ports.weather.is_some(),
        photos = ports.photos.is_some(),
        places = ports.places.is_some(),
        "discovery providers configured"
    );

    let runtime = DiscoveryRuntime::new(Arc::new(InMemoryImageCache::new()))
        .with_timeouts(settings.image_search_timeout(), request_timeout);
    Ok(TravelDiscovery::new(ports, runtime, catalogue))
}

fn parse_base_url(setting: &'static str, value: &str) -> Result<Url, BootstrapError> {
    let invalid = |reason: String| BootstrapError::InvalidBaseUrl {
        setting,
        value: value.to_owned(),
        reason,
    };
    let url = Url::parse(value).map_err(|error| invalid(error.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_owned()));
    }
    Ok(url)
}
