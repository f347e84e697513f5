//! Photo retrieval: resolve, download, memoize.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::entities::{ImageBytes, ImageReference, ImageSource};
use crate::domain::errors::FetchError;
use crate::domain::ports::{DiagnosticsPort, ImageCachePort, ImageTransportPort};
use crate::domain::Diagnostic;

use super::reference_resolver::resolve_link;

const DIAGNOSTIC_TITLE: &str = "Image";

/// Downloads photos and memoizes successful results by reference text.
///
/// Failures are never cached, so a broken link is retried on every call.
#[derive(Clone)]
pub struct ImageFetcher {
    transport: Arc<dyn ImageTransportPort>,
    cache: Arc<dyn ImageCachePort>,
}

impl std::fmt::Debug for ImageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFetcher").finish_non_exhaustive()
    }
}

impl ImageFetcher {
    /// Creates a fetcher over a transport and a cache.
    #[must_use]
    pub fn new(transport: Arc<dyn ImageTransportPort>, cache: Arc<dyn ImageCachePort>) -> Self {
        Self { transport, cache }
    }

    /// Returns the photo bytes, or `None` when there is nothing to show.
    ///
    /// Failures are reported once on `diagnostics` and never propagated.
    pub async fn fetch(
        &self,
        reference: &ImageReference,
        diagnostics: &dyn DiagnosticsPort,
    ) -> Option<ImageBytes> {
        match self.try_fetch(reference).await {
            Ok((image, _)) => Some(image),
            Err(e) => {
                if e.is_reportable() {
                    diagnostics.report(Diagnostic::error(
                        DIAGNOSTIC_TITLE,
                        format!("Failed to load image: {e}"),
                    ));
                }
                None
            }
        }
    }

    /// Returns the photo bytes and where they came from.
    ///
    /// # Errors
    /// Returns [`FetchError::EmptyReference`] for a blank reference without
    /// touching the network, or the transport/status failure otherwise.
    pub async fn try_fetch(
        &self,
        reference: &ImageReference,
    ) -> Result<(ImageBytes, ImageSource), FetchError> {
        let link = match reference.as_link() {
            Some(link) if !link.is_empty() => link,
            _ => return Err(FetchError::EmptyReference),
        };

        if let Some(image) = self.cache.get(link).await {
            trace!(reference = %link, "Image served from cache");
            return Ok((image, ImageSource::MemoryCache));
        }

        let url = resolve_link(link);
        debug!(reference = %link, url = %url, "Downloading image from network");

        let image = self.download(&url).await.map_err(|e| {
            warn!(reference = %link, url = %url, error = %e, "Image download failed");
            e
        })?;

        self.cache.put(link.to_string(), image.clone()).await;

        Ok((image, ImageSource::Network))
    }

    /// Drops every memoized image.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    async fn download(&self, url: &str) -> Result<ImageBytes, FetchError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            return Err(FetchError::status(
                response.status,
                response.reason.as_deref().unwrap_or("Unknown"),
            ));
        }

        let image = ImageBytes::new(response.body, response.content_type);

        if image.looks_like_html() {
            warn!(url = %url, "Server returned HTML instead of an image");
        }

        debug!(url = %url, size = image.len(), "Image downloaded");

        Ok(image)
    }
}
