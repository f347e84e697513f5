//! Port definition for image caching.

use crate::domain::entities::ImageBytes;

/// Port for image caching operations.
/// Entries are keyed by the original reference text, compared exactly.
/// Implementations must be thread-safe.
#[async_trait::async_trait]
pub trait ImageCachePort: Send + Sync {
    /// Attempts to get an image from the cache.
    /// Returns None if not cached.
    async fn get(&self, reference: &str) -> Option<ImageBytes>;

    /// Stores an image in the cache. An existing entry is replaced.
    async fn put(&self, reference: String, image: ImageBytes);

    /// Returns the current number of cached images.
    /// Waits for in-flight writers rather than reporting a partial view.
    async fn len(&self) -> usize;

    /// Returns true if the cache is empty.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clears all images from the cache.
    async fn clear(&self);
}
