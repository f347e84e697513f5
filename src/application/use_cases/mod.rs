//! Use case implementations.

mod load_directory_use_case;
mod render_directory_use_case;

pub use load_directory_use_case::{DEFAULT_REFRESH_INTERVAL, LoadDirectoryUseCase, LoadOutcome};
pub use render_directory_use_case::{DEFAULT_COLUMNS_PER_ROW, RenderDirectoryUseCase};
