//! Port for radius searches of points of interest.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::Coordinates;

/// A radius query around a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacesRequest {
    /// Search centre.
    pub centre: Coordinates,
    /// Search radius in metres.
    pub radius_metres: u32,
}

/// One attraction as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceHit {
    /// Provider identifier.
    pub xid: String,
    /// Display name, possibly empty.
    pub name: String,
    /// Comma-separated category list.
    pub kinds: String,
    /// Distance from the centre in metres.
    pub distance_metres: f64,
}

/// Points of interest within a radius.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacesSource: Send + Sync {
    /// Attractions around `request.centre`, in provider order.
    async fn places_within(&self, request: &PlacesRequest) -> Result<Vec<PlaceHit>, UpstreamError>;
}
