//! Record types stored in the catalogue.
//!
//! These are plain data carriers. The discovery core converts them into its
//! own domain types at the point of use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Curated profile for one allow-listed travel country.
///
/// # Example
///
/// ```
/// use seed_catalogue::CountryProfile;
///
/// let profile = CountryProfile {
///     name: "Norway".to_owned(),
///     city: "Oslo".to_owned(),
///     rating: 4.6,
///     image: "https://images.example/oslo.jpg".to_owned(),
///     description: None,
/// };
///
/// assert_eq!(profile.city, "Oslo");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    /// Common country name as reported by the reference data source.
    pub name: String,
    /// Representative city shown as the display name.
    pub city: String,
    /// Base rating on the 1 to 5 scale.
    pub rating: f64,
    /// Curated fallback image URL.
    pub image: String,
    /// Curated description, when one has been written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the bundled fallback location dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedLocation {
    /// Stable numeric-string identifier.
    pub id: String,
    /// City-level display name.
    pub name: String,
    /// Country name.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Rating on the 1 to 5 scale.
    pub rating: f64,
    /// Image URL.
    pub image_url: String,
}

/// Fixed gallery photo ids keyed by lower-cased place name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryTable {
    /// Key used when a place has no dedicated entry.
    pub default_key: String,
    /// Photo ids per place key.
    pub places: BTreeMap<String, Vec<String>>,
}
