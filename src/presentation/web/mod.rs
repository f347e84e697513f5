//! Browser surface of the directory.

mod query;
mod server;
mod view;

pub use query::parse_directory_query;
pub use server::{AppState, WebError, router, serve};
pub use view::{PageRenderer, data_uri};
