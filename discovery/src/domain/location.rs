//! Travel location records returned by the aggregator.

use seed_catalogue::SeedLocation;
use serde::Serialize;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl Coordinates {
    /// Construct a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The null island point used when a provider omits coordinates.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A destination surfaced to travellers.
///
/// Live records use the country name as `id`; seed records keep their
/// numeric string ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable identifier used by [`get_location`](crate::domain::LocationAggregator::get_location).
    pub id: String,
    /// Display name, usually the city people visit.
    pub name: String,
    /// Country the location belongs to.
    pub country: String,
    /// Human-readable summary.
    pub description: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Traveller rating on a 1 to 5 scale.
    pub rating: f64,
    /// Representative image URL.
    pub image_url: String,
    /// Resident population when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// First listed currency name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// First listed language name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Location {
    /// Coordinates of this location.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Whether `query_lower` occurs in the name or the country.
    ///
    /// The caller lower-cases the query once; both fields are compared
    /// case-insensitively.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.country.to_lowercase().contains(query_lower)
    }
}

impl From<&SeedLocation> for Location {
    fn from(seed: &SeedLocation) -> Self {
        Self {
            id: seed.id.clone(),
            name: seed.name.clone(),
            country: seed.country.clone(),
            description: seed.description.clone(),
            latitude: seed.latitude,
            longitude: seed.longitude,
            rating: seed.rating,
            image_url: seed.image_url.clone(),
            population: None,
            currency: None,
            language: None,
        }
    }
}
