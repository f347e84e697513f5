//! Application services.

pub mod image_fetcher;
pub mod image_probe;
pub mod reference_resolver;

pub use image_fetcher::ImageFetcher;
pub use image_probe::{ProbeVerdict, classify_response};
pub use reference_resolver::{extract_file_id, resolve, resolve_link, thumbnail_url};
