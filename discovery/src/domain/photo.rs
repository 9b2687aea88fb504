//! Gallery photo record.

use serde::Serialize;

/// One photo in a place gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Provider identifier, or the table position for curated photos.
    pub id: String,
    /// Cropped display URL.
    pub url: String,
    /// Alternative text.
    pub alt: String,
    /// Credited photographer.
    pub photographer: String,
    /// Link to the photographer's profile.
    pub photographer_url: String,
    /// Dominant colour as a CSS hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Crop parameters for single representative images.
pub const IMAGE_CROP: &str = "w=500&h=400&fit=crop&crop=entropy&q=80";

/// Crop parameters for gallery photos.
pub const GALLERY_CROP: &str = "w=800&h=600&fit=crop&crop=entropy&q=80";

/// Append `params` to `url`, joining with `&` when a query already exists.
pub(crate) fn with_crop(url: &str, params: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{params}")
}
