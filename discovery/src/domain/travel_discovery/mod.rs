//! Single entry point bundling the location aggregator and the weather,
//! places, and photo resolvers.
//!
//! Every operation returns a plain value. Provider failures are logged and
//! replaced with fallback data inside the individual services.

mod runtime;

pub use runtime::{
    DEFAULT_IMAGE_SEARCH_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DiscoveryPorts, DiscoveryRuntime,
    SeededRandomSource, ThreadRandomSource,
};

use std::sync::Arc;

use seed_catalogue::Catalogue;

use crate::domain::{
    Coordinates, ImageResolver, Location, LocationAggregator, Photo, PhotoGallery, Place,
    PlacesResolver, WeatherResolver, WeatherSnapshot,
};

/// Travel discovery facade.
pub struct TravelDiscovery {
    locations: LocationAggregator,
    images: Arc<ImageResolver>,
    weather: WeatherResolver,
    places: PlacesResolver,
    photos: PhotoGallery,
}

impl TravelDiscovery {
    /// Wire the services over explicit ports.
    pub fn new(ports: DiscoveryPorts, runtime: DiscoveryRuntime, catalogue: Arc<Catalogue>) -> Self {
        let images = Arc::new(ImageResolver::new(
            runtime.image_cache,
            ports.photos.clone(),
            Arc::clone(&catalogue),
            runtime.image_search_timeout,
        ));
        Self {
            locations: LocationAggregator::new(
                ports.countries,
                Arc::clone(&images),
                Arc::clone(&catalogue),
                Arc::clone(&runtime.random),
            ),
            images,
            weather: WeatherResolver::new(ports.weather, runtime.random),
            places: PlacesResolver::new(ports.places),
            photos: PhotoGallery::new(ports.photos, catalogue, runtime.request_timeout),
        }
    }

    /// See [`LocationAggregator::list_locations`].
    pub async fn list_locations(&self, search_query: Option<&str>) -> Vec<Location> {
        self.locations.list_locations(search_query).await
    }

    /// See [`LocationAggregator::get_location`].
    pub async fn get_location(&self, id: &str) -> Location {
        self.locations.get_location(id).await
    }

    /// See [`ImageResolver::resolve_image`].
    pub async fn resolve_image(&self, name: &str) -> String {
        self.images.resolve_image(name).await
    }

    /// See [`WeatherResolver::get_weather`].
    pub async fn get_weather(&self, at: Coordinates) -> WeatherSnapshot {
        self.weather.get_weather(at).await
    }

    /// See [`PlacesResolver::get_places`].
    pub async fn get_places(&self, at: Coordinates, radius_metres: Option<u32>) -> Vec<Place> {
        self.places.get_places(at, radius_metres).await
    }

    /// See [`PhotoGallery::get_photos`].
    pub async fn get_photos(&self, place_name: &str, count: Option<u32>) -> Vec<Photo> {
        self.photos.get_photos(place_name, count).await
    }
}
