//! In-memory LRU image cache implementation.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::ImageBytes;
use crate::domain::ports::ImageCachePort;

/// In-memory cache for downloaded photos, keyed by reference text.
/// Thread-safe; concurrent writers to the same key resolve last-writer-wins.
pub struct MemoryImageCache {
    cache: Arc<RwLock<LruCache<String, ImageBytes>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryImageCache {
    /// Creates a cache evicting least-recently-used entries beyond `capacity`.
    /// A capacity of zero means unbounded.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cache = NonZeroUsize::new(capacity).map_or_else(LruCache::unbounded, LruCache::new);
        Self {
            cache: Arc::new(RwLock::new(cache)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a cache that keeps every entry for the process lifetime.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Returns cache statistics.
    #[allow(clippy::cast_precision_loss)]
    pub async fn stats(&self) -> CacheStats {
        let size = self.cache.read().await.len();
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size,
        }
    }
}

impl Default for MemoryImageCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached images.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} images, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

#[async_trait::async_trait]
impl ImageCachePort for MemoryImageCache {
    async fn get(&self, reference: &str) -> Option<ImageBytes> {
        let mut cache = self.cache.write().await;
        if let Some(img) = cache.get(reference) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(reference = %reference, "Memory cache hit");
            Some(img.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(reference = %reference, "Memory cache miss");
            None
        }
    }

    async fn put(&self, reference: String, image: ImageBytes) {
        let mut cache = self.cache.write().await;
        debug!(reference = %reference, size = image.len(), "Storing image in memory cache");
        cache.put(reference, image);
    }

    async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
        debug!("Cleared memory image cache");
    }
}
