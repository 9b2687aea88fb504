//! Port for the public country directory.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::Coordinates;

/// Country facts as reported by the directory provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// Common English name, for example `France`.
    pub name: String,
    /// First listed capital. Decoded for completeness of the provider record;
    /// location names come from the curated city table instead.
    pub capital: Option<String>,
    /// Representative coordinates when the provider lists them.
    pub coordinates: Option<Coordinates>,
    /// Resident population.
    pub population: Option<u64>,
    /// Name of the first listed currency.
    pub currency: Option<String>,
    /// Name of the first listed language.
    pub language: Option<String>,
}

impl CountryRecord {
    /// A record carrying only a name; used by tests and stubs.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: None,
            coordinates: None,
            population: None,
            currency: None,
            language: None,
        }
    }

    /// Coordinates, or the origin when none were reported.
    pub fn coordinates_or_origin(&self) -> Coordinates {
        self.coordinates.unwrap_or_else(Coordinates::origin)
    }
}

/// Read access to the country directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Every country the provider knows, in provider order.
    async fn all_countries(&self) -> Result<Vec<CountryRecord>, UpstreamError>;

    /// Countries whose name matches `name`, in provider order.
    ///
    /// Implementations return [`UpstreamError::NotFound`] when the provider
    /// has no match.
    async fn countries_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, UpstreamError>;
}
