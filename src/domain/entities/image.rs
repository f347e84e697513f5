//! Domain types for photo references and downloaded images.

use bytes::Bytes;

/// An externally supplied link to a photo.
///
/// Cells that are not text (empty cells, numbers, booleans) become
/// [`ImageReference::Missing`]. Link text is kept verbatim, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ImageReference {
    /// Raw link text as found in the source.
    Link(String),
    /// The source cell held no text.
    #[default]
    Missing,
}

impl ImageReference {
    /// Creates a reference from link text.
    #[must_use]
    pub fn link(value: impl Into<String>) -> Self {
        Self::Link(value.into())
    }

    /// Creates a reference from a raw spreadsheet cell.
    #[must_use]
    pub fn from_cell(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Link(s.clone()),
            _ => Self::Missing,
        }
    }

    /// Returns the link text, if any.
    #[must_use]
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Link(s) => Some(s),
            Self::Missing => None,
        }
    }

    /// Returns true if there is nothing to fetch.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_link().is_none_or(str::is_empty)
    }
}

impl From<&str> for ImageReference {
    fn from(s: &str) -> Self {
        Self::link(s)
    }
}

impl From<String> for ImageReference {
    fn from(s: String) -> Self {
        Self::Link(s)
    }
}

impl From<Option<String>> for ImageReference {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Missing, Self::Link)
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Link(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "<missing>"),
        }
    }
}

/// Successfully downloaded image content. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBytes {
    body: Bytes,
    content_type: Option<String>,
}

impl ImageBytes {
    /// Wraps a response body and its declared content type.
    #[must_use]
    pub fn new(body: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    /// Returns the raw body.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Content type declared by the server.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Body length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// MIME type to display the image with.
    ///
    /// Prefers the declared `image/*` content type, then sniffs the magic
    /// bytes, then falls back to `application/octet-stream`.
    #[must_use]
    pub fn mime_type(&self) -> String {
        if let Some(ct) = self.content_type()
            && ct.starts_with("image/")
        {
            return ct.split(';').next().unwrap_or(ct).trim().to_string();
        }

        ::image::guess_format(&self.body).map_or_else(
            |_| "application/octet-stream".to_string(),
            |format| format.to_mime_type().to_string(),
        )
    }

    /// Returns true if the server answered with an HTML page.
    #[must_use]
    pub fn looks_like_html(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.starts_with("text/html"))
    }
}

/// Where an image was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Served from the in-memory cache.
    MemoryCache,
    /// Downloaded from network.
    Network,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemoryCache => write!(f, "memory"),
            Self::Network => write!(f, "network"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_from_cells() {
        assert_eq!(
            ImageReference::from_cell(&json!("https://example.com/a.png")),
            ImageReference::link("https://example.com/a.png")
        );
        assert_eq!(ImageReference::from_cell(&json!(null)), ImageReference::Missing);
        assert_eq!(ImageReference::from_cell(&json!(42)), ImageReference::Missing);
        assert_eq!(ImageReference::from_cell(&json!(true)), ImageReference::Missing);
    }

    #[test]
    fn test_blank_references() {
        assert!(ImageReference::Missing.is_blank());
        assert!(ImageReference::link("").is_blank());
        assert!(!ImageReference::link("x").is_blank());
    }

    #[test]
    fn test_mime_prefers_declared_image_type() {
        let img = ImageBytes::new(&b"whatever"[..], Some("image/jpeg; charset=binary".into()));
        assert_eq!(img.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_mime_sniffs_png_magic() {
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
        let img = ImageBytes::new(png, None);
        assert_eq!(img.mime_type(), "image/png");
    }

    #[test]
    fn test_mime_unknown_body() {
        let img = ImageBytes::new(&b"PNGDATA"[..], Some("text/html".into()));
        assert_eq!(img.mime_type(), "application/octet-stream");
        assert!(img.looks_like_html());
    }
}
