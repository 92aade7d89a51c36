//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.
//!
//! A missing baseline is not an error: the artifact store reports it as `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from output format resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unsupported output format: {0:?} (expected png, jpg, jpeg or webp)")]
    Unsupported(String),
}

/// Errors raised by a capture source
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture failed: {0}")]
    Failed(String),

    #[error("IO error during capture: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised by a diff engine
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Diff engine failed: {0}")]
    Failed(String),

    #[error("Diff image unavailable: {0}")]
    ImageUnavailable(String),
}

/// Errors from decoding or encoding image data
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to decode image: {0}")]
    DecodeFailed(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(#[source] image::ImageError),
}

/// Errors from writing artifacts to disk
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading comparison configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

/// Everything that can abort a single comparison
#[derive(Error, Debug)]
pub enum CompareError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
