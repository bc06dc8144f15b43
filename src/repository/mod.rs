// file: src/repository/mod.rs
// description: Source directory operations module exports
// reference: Internal module structure

pub mod loader;
pub mod scanner;

pub use loader::{LoadReport, SourceLoader};
pub use scanner::{FileScanner, ScannedFile};
