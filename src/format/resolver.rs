//! Output format resolution.
//!
//! Maps a target extension (or an explicit override) to a codec plus the
//! quality/compression value it is encoded with.

use serde::Serialize;
use std::fmt;

use crate::config::OutputSettings;
use crate::utils::config::{DEFAULT_COMPRESSION, DEFAULT_PNG_COMPRESSION};
use crate::utils::error::FormatError;

/// Supported artifact encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    Webp,
}

impl OutputFormat {
    /// Look up a format by extension name (no leading dot, case-sensitive)
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::Webp),
            other => Err(FormatError::Unsupported(other.to_string())),
        }
    }

    /// Quality (jpeg/webp) or compression level (png) used when none is configured
    pub fn default_quality(&self) -> u32 {
        match self {
            OutputFormat::Png => DEFAULT_PNG_COMPRESSION,
            OutputFormat::Jpeg | OutputFormat::Webp => DEFAULT_COMPRESSION,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
        };
        f.write_str(name)
    }
}

/// A resolved codec and its quality/compression parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeSettings {
    pub format: OutputFormat,
    pub quality: u32,
}

/// Resolve the codec for an artifact
///
/// # Arguments
/// * `ext` - Target extension, with or without the leading dot (".png", "jpg")
/// * `force_ext` - Explicit override; wins over `ext` when set
/// * `compression_level` - Quality/compression override; `None` or `0` means default
///
/// # Errors
/// * `FormatError::Unsupported` - If the chosen name is not png, jpg, jpeg or webp
///
/// # Example
/// ```ignore
/// let settings = resolve(".jpg", None, None)?;
/// assert_eq!(settings.quality, 85);
/// ```
pub fn resolve(
    ext: &str,
    force_ext: Option<&str>,
    compression_level: Option<u32>,
) -> Result<EncodeSettings, FormatError> {
    let name = match force_ext {
        Some(forced) => forced,
        None => ext.rsplit('.').next().unwrap_or(ext),
    };

    let format = OutputFormat::from_name(name)?;

    let quality = match compression_level {
        Some(level) if level > 0 => level,
        _ => format.default_quality(),
    };

    Ok(EncodeSettings { format, quality })
}

/// Resolve using the output overrides bound into a comparison config
pub fn resolve_for(ext: &str, output: &OutputSettings) -> Result<EncodeSettings, FormatError> {
    resolve(ext, output.force_ext.as_deref(), output.compression_level)
}
