//! Developer tools hosted by DUKIT.

pub mod error;
pub mod file_compare;

pub use error::ToolError;
pub use file_compare::{CompareReport, FileCompare, compare_files_with_timeout};
