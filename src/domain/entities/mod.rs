//! Domain entity definitions.

mod credentials;
mod employee;
mod image;

pub use credentials::ServiceAccountCredentials;
pub use employee::{ColumnMapping, EmployeeRecord, EmployeeTable, cell_text};
pub use image::{ImageBytes, ImageReference, ImageSource};
