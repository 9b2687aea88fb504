//! Merges the country directory with curated tables into travel
//! locations, falling back to the bundled seed set when the directory is
//! unavailable.

use std::sync::Arc;

use futures_util::future::join_all;
use seed_catalogue::Catalogue;
use tracing::{debug, warn};

use crate::domain::image_resolution::ImageResolver;
use crate::domain::numeric::scale_unit;
use crate::domain::ports::{CountryRecord, CountrySource, RandomSource, UpstreamError};
use crate::domain::Location;

/// Maximum number of live locations returned without a search query.
pub const FEATURED_LIMIT: usize = 12;

const GENERATED_RATING_LOW: f64 = 4.3;
const GENERATED_RATING_HIGH: f64 = 4.7;

/// Builds [`Location`] lists and single records.
pub struct LocationAggregator {
    countries: Arc<dyn CountrySource>,
    images: Arc<ImageResolver>,
    catalogue: Arc<Catalogue>,
    random: Arc<dyn RandomSource>,
}

impl LocationAggregator {
    /// Create an aggregator over its collaborators.
    pub fn new(
        countries: Arc<dyn CountrySource>,
        images: Arc<ImageResolver>,
        catalogue: Arc<Catalogue>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            countries,
            images,
            catalogue,
            random,
        }
    }

    /// List travel locations, optionally filtered by a search query.
    ///
    /// Without a query the live list is narrowed to featured destinations
    /// and capped at [`FEATURED_LIMIT`]. With a query, live matches are
    /// returned; an empty match set falls through to matching seeds. Any
    /// provider failure serves the seed set instead. Never fails.
    pub async fn list_locations(&self, search_query: Option<&str>) -> Vec<Location> {
        let query = search_query
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase);

        let live = match self.live_locations().await {
            Ok(live) => live,
            Err(error) => {
                warn!(
                    provider = "countries",
                    error = %error,
                    "country directory unavailable; serving seed locations"
                );
                return match query {
                    Some(ref query) => self.matching_seeds(query),
                    None => self.seed_locations(),
                };
            }
        };

        match query {
            Some(ref query) => {
                let hits: Vec<Location> = live
                    .into_iter()
                    .filter(|location| location.matches(query))
                    .collect();
                if hits.is_empty() {
                    debug!(query = %query, "no live matches; searching seed locations");
                    self.matching_seeds(query)
                } else {
                    hits
                }
            }
            None => live
                .into_iter()
                .filter(|location| self.catalogue.is_featured(&location.country))
                .take(FEATURED_LIMIT)
                .collect(),
        }
    }

    /// Fetch one location by id.
    ///
    /// Tries the directory by name first, then the seed set (exact id, then
    /// case-insensitive substring of name or country), and finally
    /// synthesises a record from the id alone. Never fails.
    pub async fn get_location(&self, id: &str) -> Location {
        match self.lookup_country(id).await {
            Ok(record) => self.enrich(record).await,
            Err(error) => {
                warn!(
                    provider = "countries",
                    id,
                    error = %error,
                    "country lookup failed; using fallback data"
                );
                match self.find_seed(id) {
                    Some(seed) => seed,
                    None => self.synthesise(id).await,
                }
            }
        }
    }

    async fn live_locations(&self) -> Result<Vec<Location>, UpstreamError> {
        let records = self.countries.all_countries().await?;
        let travel: Vec<CountryRecord> = records
            .into_iter()
            .filter(|record| self.catalogue.is_travel_country(&record.name))
            .collect();
        Ok(join_all(travel.into_iter().map(|record| self.enrich(record))).await)
    }

    async fn lookup_country(&self, id: &str) -> Result<CountryRecord, UpstreamError> {
        self.countries
            .countries_by_name(id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::not_found(format!("no country named {id}")))
    }

    async fn enrich(&self, record: CountryRecord) -> Location {
        let image_url = self.images.resolve_image(&record.name).await;
        let coordinates = record.coordinates_or_origin();
        let profile = self.catalogue.profile(&record.name);
        let description = profile
            .and_then(|profile| profile.description.clone())
            .unwrap_or_else(|| {
                format!(
                    "Discover the beautiful landscapes, rich culture, and amazing experiences waiting for you in {}.",
                    record.name
                )
            });
        Location {
            id: record.name.clone(),
            name: self.catalogue.city_for(&record.name).to_owned(),
            description,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            rating: self.rating_for(&record.name),
            image_url,
            population: record.population,
            currency: record.currency,
            language: record.language,
            country: record.name,
        }
    }

    async fn synthesise(&self, id: &str) -> Location {
        Location {
            id: id.to_owned(),
            name: id.to_owned(),
            country: id.to_owned(),
            description: format!("Discover the beautiful landscapes and rich culture of {id}."),
            latitude: 0.0,
            longitude: 0.0,
            rating: self.rating_for(id),
            image_url: self.images.resolve_image(id).await,
            population: None,
            currency: None,
            language: None,
        }
    }

    fn rating_for(&self, name: &str) -> f64 {
        self.catalogue.profile(name).map_or_else(
            || {
                scale_unit(
                    self.random.next_unit(),
                    GENERATED_RATING_LOW,
                    GENERATED_RATING_HIGH,
                )
            },
            |profile| profile.rating,
        )
    }

    fn seed_locations(&self) -> Vec<Location> {
        self.catalogue
            .seed_locations()
            .iter()
            .map(Location::from)
            .collect()
    }

    fn matching_seeds(&self, query_lower: &str) -> Vec<Location> {
        self.catalogue
            .seed_locations()
            .iter()
            .map(Location::from)
            .filter(|location| location.matches(query_lower))
            .collect()
    }

    fn find_seed(&self, id: &str) -> Option<Location> {
        let seeds = self.catalogue.seed_locations();
        let id_lower = id.to_lowercase();
        seeds
            .iter()
            .find(|seed| seed.id == id)
            .or_else(|| {
                seeds.iter().find(|seed| {
                    seed.name.to_lowercase().contains(&id_lower)
                        || seed.country.to_lowercase().contains(&id_lower)
                })
            })
            .map(Location::from)
    }
}

#[cfg(test)]
#[path = "location_aggregator_tests.rs"]
mod tests;
