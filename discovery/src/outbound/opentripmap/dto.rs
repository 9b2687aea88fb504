//! DTOs for decoding OpenTripMap GeoJSON radius responses.

use serde::Deserialize;

use crate::domain::ports::PlaceHit;

#[derive(Debug, Deserialize)]
pub(super) struct FeatureCollectionDto {
    pub(super) features: Vec<FeatureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeatureDto {
    pub(super) properties: PropertiesDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct PropertiesDto {
    pub(super) xid: String,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) kinds: String,
    #[serde(default)]
    pub(super) dist: f64,
}

impl FeatureCollectionDto {
    pub(super) fn into_hits(self) -> Vec<PlaceHit> {
        self.features
            .into_iter()
            .map(|feature| PlaceHit {
                xid: feature.properties.xid,
                name: feature.properties.name,
                kinds: feature.properties.kinds,
                distance_metres: feature.properties.dist,
            })
            .collect()
    }
}
