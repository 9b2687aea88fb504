//! Nearby attractions. Failure here yields an empty list, never fake data.

use std::sync::Arc;

use tracing::warn;

use crate::domain::numeric::round_to_u32;
use crate::domain::ports::{PlaceHit, PlacesRequest, PlacesSource};
use crate::domain::{Coordinates, Place};

/// Search radius used when the caller does not pass one.
pub const DEFAULT_RADIUS_METRES: u32 = 30_000;

/// Maximum number of places returned.
pub const MAX_PLACES: usize = 10;

/// Produces [`Place`] lists for coordinates.
pub struct PlacesResolver {
    source: Option<Arc<dyn PlacesSource>>,
}

impl PlacesResolver {
    /// Build a resolver; `source` is `None` when no credential is configured.
    pub fn new(source: Option<Arc<dyn PlacesSource>>) -> Self {
        Self { source }
    }

    /// Up to [`MAX_PLACES`] attractions within `radius_metres` of `at`,
    /// defaulting to [`DEFAULT_RADIUS_METRES`]. Never fails.
    pub async fn get_places(&self, at: Coordinates, radius_metres: Option<u32>) -> Vec<Place> {
        let Some(source) = &self.source else {
            return Vec::new();
        };
        let request = PlacesRequest {
            centre: at,
            radius_metres: radius_metres.unwrap_or(DEFAULT_RADIUS_METRES),
        };
        match source.places_within(&request).await {
            Ok(hits) => hits.into_iter().take(MAX_PLACES).map(to_place).collect(),
            Err(error) => {
                warn!(
                    provider = "places",
                    radius = request.radius_metres,
                    error = %error,
                    "places lookup failed; returning none"
                );
                Vec::new()
            }
        }
    }
}

fn to_place(hit: PlaceHit) -> Place {
    let kind = hit.kinds.split(',').next().unwrap_or_default().to_owned();
    Place {
        id: hit.xid,
        name: hit.name,
        kind,
        distance: round_to_u32(hit.distance_metres),
    }
}
