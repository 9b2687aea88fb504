//! DTOs for decoding Unsplash search payloads.

use serde::Deserialize;

use crate::domain::ports::PhotoHit;

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    #[serde(default)]
    pub(super) results: Vec<PhotoDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhotoDto {
    pub(super) id: String,
    pub(super) urls: PhotoUrlsDto,
    pub(super) alt_description: Option<String>,
    pub(super) user: PhotographerDto,
    pub(super) color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhotoUrlsDto {
    pub(super) regular: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhotographerDto {
    pub(super) name: String,
    pub(super) links: PhotographerLinksDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct PhotographerLinksDto {
    pub(super) html: String,
}

impl SearchResponseDto {
    pub(super) fn into_hits(self) -> Vec<PhotoHit> {
        self.results
            .into_iter()
            .map(|photo| PhotoHit {
                id: photo.id,
                regular_url: photo.urls.regular,
                alt_description: photo.alt_description,
                photographer_name: photo.user.name,
                photographer_url: photo.user.links.html,
                color: photo.color,
            })
            .collect()
    }
}
