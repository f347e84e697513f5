mod diagnostics_port;
mod image_cache_port;
mod image_transport_port;
mod record_source_port;

pub use diagnostics_port::DiagnosticsPort;
pub use image_cache_port::ImageCachePort;
pub use image_transport_port::{ImageTransportPort, TransportResponse};
pub use record_source_port::{RawRow, RecordSourcePort};

#[cfg(test)]
pub mod mocks {
    pub use super::diagnostics_port::mock::MockDiagnostics;
    pub use super::image_transport_port::mock::MockTransport;
    pub use super::record_source_port::mock::{MockRecordSource, employee_row};
}
