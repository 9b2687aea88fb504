//! In-process image cache adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{ImageCache, ImageCacheKey};

/// Unbounded, write-once map of image URLs.
///
/// Entries live until the cache is dropped; there is no eviction.
#[derive(Debug, Default)]
pub struct InMemoryImageCache {
    entries: Mutex<HashMap<ImageCacheKey, String>>,
}

impl InMemoryImageCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ImageCacheKey, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ImageCache for InMemoryImageCache {
    fn get(&self, key: &ImageCacheKey) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: ImageCacheKey, url: String) {
        self.lock().entry(key).or_insert(url);
    }
}
