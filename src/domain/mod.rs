//! Domain layer with core business entities and port definitions.

/// User-facing diagnostics.
pub mod diagnostic;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Record filtering.
pub mod filter;
/// Port definitions.
pub mod ports;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use entities::{EmployeeRecord, EmployeeTable, ImageBytes, ImageReference};
pub use errors::{FetchError, LoadError};
pub use filter::{FilterOptions, FilterSelection};
pub use ports::{DiagnosticsPort, ImageCachePort, ImageTransportPort, RecordSourcePort};
