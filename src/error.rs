// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source directory not found: {}", path.display())]
    SourceDirectory { path: PathBuf },

    #[error("Malformed document {}: {message}", path.display())]
    MalformedDocument { path: PathBuf, message: String },

    #[error("Schema error in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("File operation failed for {}: {source}", path.display())]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No data source files found in {}", path.display())]
    NoRecords { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            message: message.into(),
        }
    }
}
