//! Image handling infrastructure.
//!
//! This module provides:
//! - Memory caching keyed by photo reference
//! - HTTP transport with a fixed timeout

pub mod http_transport;
pub mod memory_cache;

pub use http_transport::{DEFAULT_TIMEOUT_SECS, HttpImageTransport, HttpTransportConfig};
pub use memory_cache::{CacheStats, MemoryImageCache};
