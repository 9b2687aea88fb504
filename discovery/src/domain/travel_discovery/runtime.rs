//! Port and runtime dependency bundles for the discovery facade.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::{
    CountrySource, ImageCache, PhotoSearchSource, PlacesSource, RandomSource, WeatherSource,
};

/// Deadline for each single-result image search.
pub const DEFAULT_IMAGE_SEARCH_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Deadline for every other upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(8_000);

/// Provider adapters used by the facade.
///
/// Optional sources are `None` when their credential is not configured;
/// the matching resolver then always serves fallback data.
pub struct DiscoveryPorts {
    /// Country directory adapter.
    pub countries: Arc<dyn CountrySource>,
    /// Weather adapter.
    pub weather: Option<Arc<dyn WeatherSource>>,
    /// Photo search adapter, shared by image resolution and galleries.
    pub photos: Option<Arc<dyn PhotoSearchSource>>,
    /// Points-of-interest adapter.
    pub places: Option<Arc<dyn PlacesSource>>,
}

impl DiscoveryPorts {
    /// Bundle with only the country directory configured.
    pub fn new(countries: Arc<dyn CountrySource>) -> Self {
        Self {
            countries,
            weather: None,
            photos: None,
            places: None,
        }
    }

    /// Attach a weather adapter.
    #[must_use]
    pub fn with_weather(mut self, weather: Arc<dyn WeatherSource>) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Attach a photo search adapter.
    #[must_use]
    pub fn with_photos(mut self, photos: Arc<dyn PhotoSearchSource>) -> Self {
        self.photos = Some(photos);
        self
    }

    /// Attach a points-of-interest adapter.
    #[must_use]
    pub fn with_places(mut self, places: Arc<dyn PlacesSource>) -> Self {
        self.places = Some(places);
        self
    }
}

/// Process-scoped helpers shared by the resolvers.
pub struct DiscoveryRuntime {
    /// Image memoisation store; lives as long as the facade.
    pub image_cache: Arc<dyn ImageCache>,
    /// Sample source for generated ratings and mock weather.
    pub random: Arc<dyn RandomSource>,
    /// Deadline for single-result image searches.
    pub image_search_timeout: Duration,
    /// Deadline for gallery searches.
    pub request_timeout: Duration,
}

impl DiscoveryRuntime {
    /// Runtime with thread-local randomness and default deadlines.
    pub fn new(image_cache: Arc<dyn ImageCache>) -> Self {
        Self {
            image_cache,
            random: Arc::new(ThreadRandomSource),
            image_search_timeout: DEFAULT_IMAGE_SEARCH_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Replace both deadlines.
    #[must_use]
    pub fn with_timeouts(mut self, image_search: Duration, request: Duration) -> Self {
        self.image_search_timeout = image_search;
        self.request_timeout = request;
        self
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Reproducible samples from a seeded small generator.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<SmallRng>,
}

impl SeededRandomSource {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_unit(&self) -> f64 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.r#gen::<f64>()
    }
}
