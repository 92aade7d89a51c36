//! JSON outcome writer.

use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::engine::Outcome;

/// Write outcomes to a JSON file
///
/// **Public** - lets a test suite keep a machine-readable record of its runs
///
/// # Arguments
/// * `outcomes` - Outcomes to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * I/O error while creating directories or writing
///
/// # Example
/// ```ignore
/// let outcome = comparator.check(&page, Some("home"), CaptureOptions::new()).await?;
/// write_outcomes(&[outcome], "target/visual-report.json")?;
/// ```
pub fn write_outcomes(outcomes: &[Outcome], output_path: impl AsRef<Path>) -> io::Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, outcomes)?;

    info!(
        "Outcome report written to: {} ({} entries)",
        output_path.display(),
        outcomes.len()
    );
    Ok(())
}

/// Serialize an outcome to pretty JSON
pub fn outcome_to_string(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
