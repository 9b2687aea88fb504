//! Place photo galleries backed by keyword search or a curated id table.

use std::sync::Arc;
use std::time::Duration;

use seed_catalogue::Catalogue;
use tracing::{debug, warn};

use crate::domain::Photo;
use crate::domain::photo::{GALLERY_CROP, with_crop};
use crate::domain::ports::{PhotoHit, PhotoSearchRequest, PhotoSearchSource};

/// Gallery size used when the caller does not pass one.
pub const DEFAULT_PHOTO_COUNT: u32 = 6;

const CURATED_PHOTOGRAPHER: &str = "Unsplash Photographer";
const CURATED_PROFILE_URL: &str = "https://unsplash.com";
const CURATED_COLOR: &str = "#3B82F6";
const CURATED_PHOTO_PARAMS: &str = "w=800&h=600&fit=crop&crop=entropy&auto=format&q=80";

/// Produces photo galleries for place names.
pub struct PhotoGallery {
    source: Option<Arc<dyn PhotoSearchSource>>,
    catalogue: Arc<Catalogue>,
    timeout: Duration,
}

impl PhotoGallery {
    /// Build a gallery; `source` is `None` when no credential is configured.
    pub fn new(
        source: Option<Arc<dyn PhotoSearchSource>>,
        catalogue: Arc<Catalogue>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            catalogue,
            timeout,
        }
    }

    /// Up to `count` photos of `place_name`, defaulting to
    /// [`DEFAULT_PHOTO_COUNT`]. Never fails and never returns an empty
    /// gallery while the curated table has entries.
    pub async fn get_photos(&self, place_name: &str, count: Option<u32>) -> Vec<Photo> {
        let count = count.unwrap_or(DEFAULT_PHOTO_COUNT);
        if let Some(source) = &self.source {
            let request = PhotoSearchRequest {
                query: place_name.to_owned(),
                per_page: count,
                timeout: self.timeout,
            };
            match source.search_photos(&request).await {
                Ok(hits) if !hits.is_empty() => {
                    return hits
                        .into_iter()
                        .enumerate()
                        .map(|(index, hit)| searched_photo(hit, place_name, index))
                        .collect();
                }
                Ok(_) => debug!(place = place_name, "photo search found nothing; using curated gallery"),
                Err(error) => warn!(
                    provider = "photos",
                    place = place_name,
                    error = %error,
                    "photo search failed; using curated gallery"
                ),
            }
        }
        self.curated_photos(place_name, count)
    }

    fn curated_photos(&self, place_name: &str, count: u32) -> Vec<Photo> {
        let lowered = place_name.to_lowercase();
        let key = lowered.split(',').next().unwrap_or_default();
        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        self.catalogue
            .gallery_photo_ids(key)
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, photo_id)| Photo {
                id: index.to_string(),
                url: format!("https://images.unsplash.com/photo-{photo_id}?{CURATED_PHOTO_PARAMS}"),
                alt: format!("{place_name} - Photo {}", index.saturating_add(1)),
                photographer: CURATED_PHOTOGRAPHER.to_owned(),
                photographer_url: CURATED_PROFILE_URL.to_owned(),
                color: Some(CURATED_COLOR.to_owned()),
            })
            .collect()
    }
}

fn searched_photo(hit: PhotoHit, place_name: &str, index: usize) -> Photo {
    Photo {
        url: with_crop(&hit.regular_url, GALLERY_CROP),
        alt: hit
            .alt_description
            .unwrap_or_else(|| format!("{place_name} - Photo {}", index.saturating_add(1))),
        id: hit.id,
        photographer: hit.photographer_name,
        photographer_url: hit.photographer_url,
        color: hit.color,
    }
}
