//! Validate command: load a config and show what it normalizes to.

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::config::load_config;
use crate::output::render_config;

/// Load and print a comparison config
///
/// **Public** - main entry point called from main.rs
///
/// Suspicious values are reported but do not fail validation; only
/// unreadable files and malformed TOML do.
pub fn validate_config(path: &Path, as_json: bool) -> Result<()> {
    let config = load_config(path)?;
    debug!("Loaded config: {:?}", config);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("✓ Valid config: {}", path.display());
        println!();
        print!("{}", render_config(&config));
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Shot Compare v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Visual regression baselines and diffs for screenshots.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_good_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 1.5").unwrap();

        assert!(validate_config(file.path(), false).is_ok());
        assert!(validate_config(file.path(), true).is_ok());
    }

    #[test]
    fn test_validate_bad_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = [").unwrap();

        assert!(validate_config(file.path(), false).is_err());
    }
}
