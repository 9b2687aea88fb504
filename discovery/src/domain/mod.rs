//! Domain entities, resolver services, and ports.
//!
//! Nothing in here performs I/O directly; adapters in `crate::outbound`
//! implement the traits in [`ports`].

pub mod ports;

mod image_resolution;
mod location;
mod location_aggregator;
mod numeric;
mod photo;
mod photo_gallery;
mod place;
mod places_resolver;
mod travel_discovery;
mod weather;
mod weather_resolver;

pub use self::image_resolution::{
    CuratedImageStrategy, ImageResolver, ImageStrategy, PhotoSearchStrategy, query_variants,
};
pub use self::location::{Coordinates, Location};
pub use self::location_aggregator::{FEATURED_LIMIT, LocationAggregator};
pub use self::photo::{GALLERY_CROP, IMAGE_CROP, Photo};
pub use self::photo_gallery::{DEFAULT_PHOTO_COUNT, PhotoGallery};
pub use self::place::Place;
pub use self::places_resolver::{DEFAULT_RADIUS_METRES, MAX_PLACES, PlacesResolver};
pub use self::travel_discovery::{
    DEFAULT_IMAGE_SEARCH_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DiscoveryPorts, DiscoveryRuntime,
    SeededRandomSource, ThreadRandomSource, TravelDiscovery,
};
pub use self::weather::{DEFAULT_WEATHER_GLYPH, WeatherSnapshot, condition_glyph};
pub use self::weather_resolver::{STANDARD_PRESSURE_HPA, WeatherResolver};
