//! Custom error types for launcher-icons.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher-icons library.
#[derive(Error, Debug)]
pub enum Error {
    /// The source image does not exist.
    #[error("source image not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The source image exists but could not be read or decoded.
    #[error("failed to decode image from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an output icon.
    #[error("failed to write icon to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for launcher-icons operations.
pub type Result<T> = std::result::Result<T, Error>;
