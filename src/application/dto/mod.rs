//! Data transfer objects for the application layer.

mod directory_dto;

pub use directory_dto::{CardView, DirectoryPage, DirectoryQuery, DirectoryView};
