//! Port for memoising resolved image URLs.

use super::ImageCacheKey;

/// Process-lifetime store of image URLs keyed by normalised name.
///
/// Entries are write-once: a second `set` for an existing key leaves the
/// first URL in place, and nothing is evicted.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCache: Send + Sync {
    /// Cached URL for `key`, if any.
    fn get(&self, key: &ImageCacheKey) -> Option<String>;

    /// Record `url` for `key` unless an entry already exists.
    fn set(&self, key: ImageCacheKey, url: String);
}
