//! Memoised "best image for a name" lookups.
//!
//! A miss walks an ordered list of [`ImageStrategy`] values. The first
//! strategy that yields a URL wins and the result is cached for the rest of
//! the process lifetime. The curated table strategy always yields, so every
//! lookup produces a URL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use seed_catalogue::Catalogue;
use tracing::debug;

use crate::domain::photo::{IMAGE_CROP, with_crop};
use crate::domain::ports::{ImageCache, ImageCacheKey, PhotoSearchRequest, PhotoSearchSource};

/// One way of finding an image for a name.
#[async_trait]
pub trait ImageStrategy: Send + Sync {
    /// Short label used in log fields.
    fn label(&self) -> &'static str;

    /// Try to find an image for `name`; `None` passes to the next strategy.
    async fn attempt(&self, name: &str) -> Option<String>;
}

/// Query templates tried in order against the photo search provider.
pub fn query_variants(name: &str, city: &str) -> [String; 5] {
    [
        format!("{city} travel"),
        format!("{name} landscape"),
        format!("{city} city"),
        format!("{name} tourism"),
        format!("{city} landmarks"),
    ]
}

/// Searches the photo provider with successive query variants.
pub struct PhotoSearchStrategy {
    source: Arc<dyn PhotoSearchSource>,
    catalogue: Arc<Catalogue>,
    timeout: Duration,
}

impl PhotoSearchStrategy {
    /// Build a strategy that gives each search `timeout` to complete.
    pub fn new(
        source: Arc<dyn PhotoSearchSource>,
        catalogue: Arc<Catalogue>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            catalogue,
            timeout,
        }
    }
}

#[async_trait]
impl ImageStrategy for PhotoSearchStrategy {
    fn label(&self) -> &'static str {
        "photo-search"
    }

    async fn attempt(&self, name: &str) -> Option<String> {
        let city = self.catalogue.city_for(name);
        for query in query_variants(name, city) {
            let request = PhotoSearchRequest {
                query,
                per_page: 1,
                timeout: self.timeout,
            };
            match self.source.search_photos(&request).await {
                Ok(hits) => match hits.into_iter().next() {
                    Some(hit) => return Some(with_crop(&hit.regular_url, IMAGE_CROP)),
                    None => debug!(query = %request.query, "photo search returned no results"),
                },
                Err(error) => {
                    debug!(query = %request.query, error = %error, "photo search variant failed");
                }
            }
        }
        None
    }
}

/// Looks names up in the curated image table, then the default image.
pub struct CuratedImageStrategy {
    catalogue: Arc<Catalogue>,
}

impl CuratedImageStrategy {
    /// Build a strategy over `catalogue`.
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl ImageStrategy for CuratedImageStrategy {
    fn label(&self) -> &'static str {
        "curated-table"
    }

    async fn attempt(&self, name: &str) -> Option<String> {
        Some(self.catalogue.fallback_image(name).to_owned())
    }
}

/// Resolves and memoises representative images.
pub struct ImageResolver {
    cache: Arc<dyn ImageCache>,
    strategies: Vec<Box<dyn ImageStrategy>>,
    default_image: String,
}

impl ImageResolver {
    /// Build the standard chain: photo search when a source is configured,
    /// then the curated table.
    pub fn new(
        cache: Arc<dyn ImageCache>,
        photos: Option<Arc<dyn PhotoSearchSource>>,
        catalogue: Arc<Catalogue>,
        search_timeout: Duration,
    ) -> Self {
        let mut strategies: Vec<Box<dyn ImageStrategy>> = Vec::with_capacity(2);
        if let Some(source) = photos {
            strategies.push(Box::new(PhotoSearchStrategy::new(
                source,
                Arc::clone(&catalogue),
                search_timeout,
            )));
        }
        let default_image = catalogue.default_image().to_owned();
        strategies.push(Box::new(CuratedImageStrategy::new(catalogue)));
        Self::with_strategies(cache, strategies, default_image)
    }

    /// Build a resolver over an explicit strategy list.
    ///
    /// `default_image` is used when every strategy declines.
    pub fn with_strategies(
        cache: Arc<dyn ImageCache>,
        strategies: Vec<Box<dyn ImageStrategy>>,
        default_image: String,
    ) -> Self {
        Self {
            cache,
            strategies,
            default_image,
        }
    }

    /// Return the image URL for `name`, consulting the cache first.
    pub async fn resolve_image(&self, name: &str) -> String {
        let key = ImageCacheKey::for_name(name);
        if let Some(url) = self.cache.get(&key) {
            debug!(key = %key, "image cache hit");
            return url;
        }

        let mut resolved = None;
        for strategy in &self.strategies {
            if let Some(url) = strategy.attempt(name).await {
                debug!(key = %key, strategy = strategy.label(), "image resolved");
                resolved = Some(url);
                break;
            }
        }
        let url = resolved.unwrap_or_else(|| self.default_image.clone());
        self.cache.set(key, url.clone());
        url
    }
}
