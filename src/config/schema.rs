//! Comparison configuration types.
//!
//! A `ComparisonConfig` is built once and shared, immutable, by every
//! comparison a `ScreenComparator` runs. TOML files deserialize into the
//! same types (see `loader.rs`).

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::config::{LEGACY_MATCHING_BOX_NOTICE, THRESHOLD_RANGE};

/// A rectangular region of the screenshot, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Regions excluded from, or exclusively included in, the comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MatchingBoxInput")]
pub struct MatchingBox {
    /// Regions the diff engine must skip
    pub ignore_rectangles: Vec<Rect>,

    /// Regions the diff engine compares exclusively
    pub include_rectangles: Vec<Rect>,
}

impl MatchingBox {
    pub fn ignoring(rects: Vec<Rect>) -> Self {
        Self {
            ignore_rectangles: rects,
            include_rectangles: Vec::new(),
        }
    }

    pub fn including(rects: Vec<Rect>) -> Self {
        Self {
            ignore_rectangles: Vec::new(),
            include_rectangles: rects,
        }
    }
}

/// Both accepted shapes of a matching box.
///
/// The bare list is the older API and means "ignore these rectangles".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MatchingBoxInput {
    Legacy(Vec<Rect>),
    Lists {
        #[serde(default)]
        ignore_rectangles: Vec<Rect>,
        #[serde(default)]
        include_rectangles: Vec<Rect>,
    },
}

impl From<MatchingBoxInput> for MatchingBox {
    fn from(input: MatchingBoxInput) -> Self {
        match input {
            MatchingBoxInput::Legacy(rects) => {
                warn!("{}", LEGACY_MATCHING_BOX_NOTICE);
                MatchingBox::ignoring(rects)
            }
            MatchingBoxInput::Lists {
                ignore_rectangles,
                include_rectangles,
            } => MatchingBox {
                ignore_rectangles,
                include_rectangles,
            },
        }
    }
}

impl From<Vec<Rect>> for MatchingBoxInput {
    fn from(rects: Vec<Rect>) -> Self {
        MatchingBoxInput::Legacy(rects)
    }
}

impl From<MatchingBox> for MatchingBoxInput {
    fn from(matching_box: MatchingBox) -> Self {
        MatchingBoxInput::Lists {
            ignore_rectangles: matching_box.ignore_rectangles,
            include_rectangles: matching_box.include_rectangles,
        }
    }
}

/// RGB color of the diff overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// How differing pixels are painted in the diff image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    #[default]
    Flat,
    Movement,
    FlatDifferenceIntensity,
    MovementDifferenceIntensity,
    DiffOnly,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorType::Flat => "flat",
            ErrorType::Movement => "movement",
            ErrorType::FlatDifferenceIntensity => "flat_difference_intensity",
            ErrorType::MovementDifferenceIntensity => "movement_difference_intensity",
            ErrorType::DiffOnly => "diff_only",
        };
        f.write_str(label)
    }
}

/// Rendering style for the diff overlay.
///
/// Passed to the diff engine with every request, so comparators built from
/// different configs never share a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSettings {
    pub error_color: ErrorColor,
    pub error_type: ErrorType,

    /// Overlay opacity, 0.0-1.0
    pub transparency: f64,
}

impl Default for ErrorSettings {
    fn default() -> Self {
        Self {
            error_color: ErrorColor {
                red: 255,
                green: 0,
                blue: 255,
            },
            error_type: ErrorType::Flat,
            transparency: 0.7,
        }
    }
}

/// Output format overrides applied to every artifact write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Codec name that wins over the file extension (png, jpg, jpeg, webp)
    pub force_ext: Option<String>,

    /// Quality (jpeg/webp) or compression level (png); zero means unset
    pub compression_level: Option<u32>,
}

/// Complete comparison configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Directory holding baselines and artifacts unless a capture path overrides it
    pub base_dir: PathBuf,

    /// Percentage of differing pixels tolerated (exclusive upper bound)
    #[serde(default)]
    pub threshold: f64,

    /// Count anti-aliased pixels as differences
    #[serde(default)]
    pub include_antialiasing: bool,

    /// Compare luminance only
    #[serde(default)]
    pub ignore_colors: bool,

    #[serde(default)]
    pub matching_box: MatchingBox,

    #[serde(default)]
    pub error_settings: ErrorSettings,

    #[serde(default)]
    pub output_settings: OutputSettings,
}

impl ComparisonConfig {
    /// Create a config with default tolerances rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            threshold: 0.0,
            include_antialiasing: false,
            ignore_colors: false,
            matching_box: MatchingBox::default(),
            error_settings: ErrorSettings::default(),
            output_settings: OutputSettings::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_antialiasing(mut self, include: bool) -> Self {
        self.include_antialiasing = include;
        self
    }

    pub fn with_ignore_colors(mut self, ignore: bool) -> Self {
        self.ignore_colors = ignore;
        self
    }

    /// Set the matching box; a bare `Vec<Rect>` is accepted as the legacy shape
    pub fn with_matching_box(mut self, matching_box: impl Into<MatchingBoxInput>) -> Self {
        self.matching_box = MatchingBox::from(matching_box.into());
        self
    }

    pub fn with_error_settings(mut self, settings: ErrorSettings) -> Self {
        self.error_settings = settings;
        self
    }

    pub fn with_output_settings(mut self, settings: OutputSettings) -> Self {
        self.output_settings = settings;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Report values that are accepted but probably not what the caller meant.
    ///
    /// Nothing here is rejected; out-of-range values simply behave as the
    /// threshold comparison implies.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !THRESHOLD_RANGE.contains(&self.threshold) {
            warnings.push(format!(
                "threshold {} is outside 0-100; every comparison will {}",
                self.threshold,
                if self.threshold < 0.0 {
                    "fail"
                } else {
                    "pass when dimensions match"
                }
            ));
        }

        if !(0.0..=1.0).contains(&self.error_settings.transparency) {
            warnings.push(format!(
                "error transparency {} is outside 0-1",
                self.error_settings.transparency
            ));
        }

        let boxes = [
            ("ignore", &self.matching_box.ignore_rectangles),
            ("include", &self.matching_box.include_rectangles),
        ];
        for (kind, rects) in boxes {
            for rect in rects.iter().filter(|r| r.is_empty()) {
                warnings.push(format!(
                    "{} rectangle at ({}, {}) has zero area",
                    kind, rect.x, rect.y
                ));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::new("/tmp/shots");
        assert_eq!(config.threshold, 0.0);
        assert!(!config.include_antialiasing);
        assert!(!config.ignore_colors);
        assert!(config.matching_box.ignore_rectangles.is_empty());
        assert!(config.matching_box.include_rectangles.is_empty());
        assert_eq!(config.error_settings.error_type, ErrorType::Flat);
        assert_eq!(config.error_settings.transparency, 0.7);
        assert_eq!(config.output_settings, OutputSettings::default());
    }

    #[test]
    fn test_legacy_matching_box_normalized() {
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(5, 5, 2, 2)];
        let config = ComparisonConfig::new(".").with_matching_box(rects.clone());

        assert_eq!(config.matching_box.ignore_rectangles, rects);
        assert!(config.matching_box.include_rectangles.is_empty());
    }

    #[test]
    fn test_matching_box_kept_as_is() {
        let matching_box = MatchingBox {
            ignore_rectangles: vec![Rect::new(1, 2, 3, 4)],
            include_rectangles: vec![Rect::new(0, 0, 100, 50)],
        };
        let config = ComparisonConfig::new(".").with_matching_box(matching_box.clone());
        assert_eq!(config.matching_box, matching_box);
    }

    #[test]
    fn test_warnings_for_out_of_range_values() {
        let config = ComparisonConfig::new(".")
            .with_threshold(150.0)
            .with_error_settings(ErrorSettings {
                transparency: 2.0,
                ..Default::default()
            })
            .with_matching_box(vec![Rect::new(3, 4, 0, 10)]);

        let warnings = config.warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("threshold 150"));
        assert!(warnings[1].contains("transparency 2"));
        assert!(warnings[2].contains("(3, 4)"));
    }

    #[test]
    fn test_no_warnings_for_defaults() {
        assert!(ComparisonConfig::new(".").warnings().is_empty());
    }
}
