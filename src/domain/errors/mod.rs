//! Domain error types.

mod fetch_error;
mod load_error;

pub use fetch_error::FetchError;
pub use load_error::LoadError;
