//! Cache key type shared by image cache adapters.

use std::fmt;

/// Normalised key for memoised image lookups.
///
/// Keys are the lower-cased place or country name, so lookups that differ
/// only by case share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageCacheKey(String);

impl ImageCacheKey {
    /// Derive the cache key for a place or country name.
    ///
    /// # Examples
    /// ```
    /// use discovery::domain::ports::ImageCacheKey;
    ///
    /// let key = ImageCacheKey::for_name("New Zealand");
    /// assert_eq!(key.as_str(), "new zealand");
    /// assert_eq!(key, ImageCacheKey::for_name("NEW ZEALAND"));
    /// ```
    pub fn for_name(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ImageCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
