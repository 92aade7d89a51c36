//! Loading comparison configuration from TOML files.

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::{ComparisonConfig, ErrorSettings, MatchingBox, OutputSettings};
use crate::utils::error::ConfigError;

/// On-disk shape: like `ComparisonConfig` but `base_dir` is optional
#[derive(Debug, Deserialize)]
struct ConfigFile {
    base_dir: Option<PathBuf>,

    #[serde(default)]
    threshold: f64,

    #[serde(default)]
    include_antialiasing: bool,

    #[serde(default)]
    ignore_colors: bool,

    #[serde(default)]
    matching_box: MatchingBox,

    #[serde(default)]
    error_settings: ErrorSettings,

    #[serde(default)]
    output_settings: OutputSettings,
}

/// Load a comparison config from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Returns
/// Normalized ComparisonConfig. A relative (or missing) `base_dir` is
/// resolved against the directory holding the config file.
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_config("tests/visual/shots.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ComparisonConfig, ConfigError> {
    let path = path.as_ref();
    info!("Loading comparison config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    parse_config(&contents, config_dir)
}

/// Parse TOML config text, resolving `base_dir` against `config_dir`
pub fn parse_config(contents: &str, config_dir: &Path) -> Result<ComparisonConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(contents)?;

    let base_dir = match file.base_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => config_dir.join(dir),
        None => config_dir.to_path_buf(),
    };
    debug!("Resolved base directory: {}", base_dir.display());

    Ok(ComparisonConfig {
        base_dir,
        threshold: file.threshold,
        include_antialiasing: file.include_antialiasing,
        ignore_colors: file.ignore_colors,
        matching_box: file.matching_box,
        error_settings: file.error_settings,
        output_settings: file.output_settings,
    })
}
