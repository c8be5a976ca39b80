//! Error types for xmas-scan-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for xmas-scan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load grid from {}: {source}", path.display())]
    GridLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for xmas-scan operations
pub type Result<T> = std::result::Result<T, Error>;
