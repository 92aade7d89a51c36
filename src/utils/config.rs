//! Configuration and constants shared across the comparator.

/// Default JPEG/WEBP quality when no compression level is configured
pub const DEFAULT_COMPRESSION: u32 = 85;

/// Default PNG compression level (zlib scale, 0-9)
pub const DEFAULT_PNG_COMPRESSION: u32 = 8;

/// Test name used when the caller passes none
pub const DEFAULT_TEST_NAME: &str = "test";

/// Extension used when neither a path nor a capture type names one
pub const DEFAULT_EXTENSION: &str = ".png";

// Artifact suffixes, appended between name and extension
pub const DIFF_SUFFIX: &str = "-diff";
pub const NEW_SUFFIX: &str = "-new";

/// Valid range for the mismatch threshold (percent of differing pixels)
pub const THRESHOLD_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Shown when a config still uses the bare-list matching box
pub const LEGACY_MATCHING_BOX_NOTICE: &str = "matching_box given as a bare list of rectangles is deprecated; \
     use {ignore_rectangles = [...], include_rectangles = [...]} instead";
