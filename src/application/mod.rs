//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateless and cached services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{CardView, DirectoryPage, DirectoryQuery, DirectoryView};
pub use services::ImageFetcher;
pub use use_cases::{LoadDirectoryUseCase, LoadOutcome, RenderDirectoryUseCase};
