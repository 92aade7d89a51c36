//! Comparison configuration: tolerances, masking, overlay style and output
//! overrides, built in code or loaded from TOML.

mod loader;
mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{
    ComparisonConfig, ErrorColor, ErrorSettings, ErrorType, MatchingBox, MatchingBoxInput,
    OutputSettings, Rect,
};
