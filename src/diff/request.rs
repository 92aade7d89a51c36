//! What a diff engine is asked to compare, and how.

use serde::Serialize;

use crate::config::{ComparisonConfig, ErrorSettings, Rect};

/// Compare-time options handed to the diff engine.
///
/// When both rectangle lists are set, how they combine is up to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompareOptions {
    pub ignore_antialiasing: bool,
    pub ignore_colors: bool,
    pub ignore_rectangles: Vec<Rect>,
    pub include_rectangles: Vec<Rect>,
}

impl CompareOptions {
    /// Compose the options a config asks for
    ///
    /// Anti-aliasing is ignored unless the config includes it; empty
    /// rectangle lists stay empty.
    pub fn from_config(config: &ComparisonConfig) -> Self {
        let mut options = CompareOptions::default();

        if !config.include_antialiasing {
            options.ignore_antialiasing = true;
        }
        if config.ignore_colors {
            options.ignore_colors = true;
        }
        if !config.matching_box.ignore_rectangles.is_empty() {
            options.ignore_rectangles = config.matching_box.ignore_rectangles.clone();
        }
        if !config.matching_box.include_rectangles.is_empty() {
            options.include_rectangles = config.matching_box.include_rectangles.clone();
        }

        options
    }
}

/// One comparison request
#[derive(Debug, Clone, Copy)]
pub struct DiffRequest<'a> {
    /// Encoded baseline image
    pub baseline: &'a [u8],

    /// Encoded freshly captured image
    pub capture: &'a [u8],

    pub options: &'a CompareOptions,

    /// Overlay style for the diff image of this request only
    pub render: &'a ErrorSettings,
}
