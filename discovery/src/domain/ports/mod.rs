//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Resolvers depend only on these traits; `crate::outbound` supplies the
//! HTTP, cache and randomness adapters.

mod macros;

pub(crate) use macros::define_port_error;

mod cache_key;
mod country_source;
mod image_cache;
mod photo_search_source;
mod places_source;
mod random_source;
mod upstream_error;
mod weather_source;

pub use cache_key::ImageCacheKey;
#[cfg(test)]
pub use country_source::MockCountrySource;
pub use country_source::{CountryRecord, CountrySource};
#[cfg(test)]
pub use image_cache::MockImageCache;
pub use image_cache::ImageCache;
#[cfg(test)]
pub use photo_search_source::MockPhotoSearchSource;
pub use photo_search_source::{PhotoHit, PhotoSearchRequest, PhotoSearchSource};
#[cfg(test)]
pub use places_source::MockPlacesSource;
pub use places_source::{PlaceHit, PlacesRequest, PlacesSource};
pub use random_source::RandomSource;
pub use upstream_error::UpstreamError;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{WeatherReading, WeatherSource};
