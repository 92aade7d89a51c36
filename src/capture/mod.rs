//! Screenshot capture seam.
//!
//! The comparator never grabs pixels itself. It asks a `CaptureSource`
//! (a browser page, a window grabber, a file) for an encoded image buffer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::utils::error::CaptureError;

/// Per-invocation capture options.
///
/// `path`, `save_new_image_on_error` and `overwrite_image_on_change` steer
/// the comparator; the comparator strips `path` before handing the options
/// to the capture source. `image_type` and `extra` are for the source's own
/// encoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    /// Overrides save folder, name and extension of the baseline
    pub path: Option<PathBuf>,

    /// Requested encoding ("png", "jpeg", "webp"); also picks the default extension
    #[serde(rename = "type")]
    pub image_type: Option<String>,

    /// On mismatch, also save the capture as `{name}-new{ext}`
    #[serde(alias = "saveNewImageOnError")]
    pub save_new_image_on_error: bool,

    /// On mismatch, replace the baseline with the capture
    #[serde(alias = "overwriteImageOnChange")]
    pub overwrite_image_on_change: bool,

    /// Pass-through encoder options for the capture source
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_type(mut self, image_type: impl Into<String>) -> Self {
        self.image_type = Some(image_type.into());
        self
    }

    pub fn save_new_image_on_error(mut self, save: bool) -> Self {
        self.save_new_image_on_error = save;
        self
    }

    pub fn overwrite_image_on_change(mut self, overwrite: bool) -> Self {
        self.overwrite_image_on_change = overwrite;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Something that can produce an encoded screenshot
#[async_trait]
pub trait CaptureSource: Send + Sync {
    /// Capture a screenshot and return its encoded bytes
    async fn screenshot(&self, options: &CaptureOptions) -> Result<Vec<u8>, CaptureError>;
}

/// A capture that was already taken; returns the same buffer every time
#[derive(Debug, Clone)]
pub struct StaticCapture {
    bytes: Vec<u8>,
}

impl StaticCapture {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Load the capture from an image file on disk
    pub async fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CaptureError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { bytes })
    }
}

#[async_trait]
impl CaptureSource for StaticCapture {
    async fn screenshot(&self, _options: &CaptureOptions) -> Result<Vec<u8>, CaptureError> {
        Ok(self.bytes.clone())
    }
}
