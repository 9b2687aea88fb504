//! Catalogue loading, validation, and lookups.
//!
//! The catalogue is loaded from JSON (normally the copy embedded in this
//! crate) and validated once. Lookups afterwards never fail: unknown names
//! fall back to the name itself, the default image, or the default gallery.

use std::collections::HashSet;

use serde::Deserialize;

use crate::entries::{CountryProfile, GalleryTable, SeedLocation};
use crate::error::CatalogueError;

/// Current supported catalogue version.
pub const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_JSON: &str = include_str!("../data/catalogue.json");

/// Validated curated tables and seed dataset.
///
/// # Example
///
/// ```
/// use seed_catalogue::Catalogue;
///
/// let catalogue = Catalogue::bundled().expect("bundled catalogue is valid");
///
/// assert!(catalogue.is_travel_country("Iceland"));
/// assert!(!catalogue.is_travel_country("Atlantis"));
/// assert_eq!(catalogue.fallback_image("Atlantis"), catalogue.default_image());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    version: u32,
    default_image: String,
    featured_countries: Vec<String>,
    countries: Vec<CountryProfile>,
    seed_locations: Vec<SeedLocation>,
    gallery: GalleryTable,
}

impl Catalogue {
    /// Loads the catalogue embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] only if the embedded JSON has been edited
    /// into an invalid state.
    pub fn bundled() -> Result<Self, CatalogueError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or misses required fields
    /// - The version is unsupported
    /// - The seed dataset is empty or repeats an id
    /// - Any rating lies outside the 1 to 5 scale
    /// - A featured country has no profile
    /// - The gallery default is missing or any gallery entry is empty
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalogue) -> Result<Self, CatalogueError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        validate_seed_locations(&raw.seed_locations)?;

        for profile in &raw.countries {
            check_rating(&profile.name, profile.rating)?;
        }

        if let Some(name) = raw
            .featured_countries
            .iter()
            .find(|name| !raw.countries.iter().any(|profile| &profile.name == *name))
        {
            return Err(CatalogueError::UnknownFeaturedCountry { name: name.clone() });
        }

        validate_gallery(&raw.gallery)?;

        Ok(Self {
            version: raw.version,
            default_image: raw.default_image,
            featured_countries: raw.featured_countries,
            countries: raw.countries,
            seed_locations: raw.seed_locations,
            gallery: raw.gallery,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the generic travel image used when a name has no curated image.
    #[must_use]
    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Returns every allow-listed country profile in catalogue order.
    #[must_use]
    pub fn countries(&self) -> &[CountryProfile] {
        &self.countries
    }

    /// Returns the bundled fallback locations in their fixed order.
    #[must_use]
    pub fn seed_locations(&self) -> &[SeedLocation] {
        &self.seed_locations
    }

    /// Finds the curated profile for an exact country name.
    #[must_use]
    pub fn profile(&self, country: &str) -> Option<&CountryProfile> {
        self.countries.iter().find(|profile| profile.name == country)
    }

    /// Reports whether `country` is on the travel allow-list.
    #[must_use]
    pub fn is_travel_country(&self, country: &str) -> bool {
        self.profile(country).is_some()
    }

    /// Reports whether `country` is one of the featured destinations.
    #[must_use]
    pub fn is_featured(&self, country: &str) -> bool {
        self.featured_countries.iter().any(|name| name == country)
    }

    /// Returns the representative city for `country`, or `country` itself.
    #[must_use]
    pub fn city_for<'a>(&'a self, country: &'a str) -> &'a str {
        self.profile(country)
            .map_or(country, |profile| profile.city.as_str())
    }

    /// Returns the curated image for `country`, or the default image.
    #[must_use]
    pub fn fallback_image(&self, country: &str) -> &str {
        self.profile(country)
            .map_or(self.default_image.as_str(), |profile| profile.image.as_str())
    }

    /// Returns the gallery photo ids for `key`, or the default gallery.
    #[must_use]
    pub fn gallery_photo_ids(&self, key: &str) -> &[String] {
        self.gallery
            .places
            .get(key)
            .or_else(|| self.gallery.places.get(&self.gallery.default_key))
            .map_or(&[], Vec::as_slice)
    }
}

fn validate_seed_locations(seeds: &[SeedLocation]) -> Result<(), CatalogueError> {
    if seeds.is_empty() {
        return Err(CatalogueError::EmptySeedLocations);
    }

    let mut seen = HashSet::with_capacity(seeds.len());
    for seed in seeds {
        if !seen.insert(seed.id.as_str()) {
            return Err(CatalogueError::DuplicateSeedId {
                id: seed.id.clone(),
            });
        }
        check_rating(&seed.name, seed.rating)?;
    }
    Ok(())
}

fn check_rating(name: &str, rating: f64) -> Result<(), CatalogueError> {
    if (1.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(CatalogueError::RatingOutOfRange {
            name: name.to_owned(),
            rating,
        })
    }
}

fn validate_gallery(gallery: &GalleryTable) -> Result<(), CatalogueError> {
    if let Some((key, _)) = gallery.places.iter().find(|(_, ids)| ids.is_empty()) {
        return Err(CatalogueError::EmptyGallery { key: key.clone() });
    }
    if !gallery.places.contains_key(&gallery.default_key) {
        return Err(CatalogueError::MissingGalleryDefault {
            key: gallery.default_key.clone(),
        });
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogue {
    version: u32,
    default_image: String,
    featured_countries: Vec<String>,
    countries: Vec<CountryProfile>,
    seed_locations: Vec<SeedLocation>,
    gallery: GalleryTable,
}
