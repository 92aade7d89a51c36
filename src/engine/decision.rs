//! The per-invocation decision: look up the baseline, capture, compare,
//! decide, and write artifacts.
//!
//! Per invocation:
//! 1. Resolve folder/name/extension
//! 2. Read the baseline (missing means first run)
//! 3. Capture the screenshot
//! 4. No baseline: save the capture as baseline and pass
//! 5. Otherwise ask the diff engine and apply the threshold policy
//! 6. On failure write `{name}-diff{ext}` and, if asked, the capture

use image::DynamicImage;
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::Arc;

use super::target::{resolve_target, Target};
use super::verdict::Outcome;
use crate::capture::{CaptureOptions, CaptureSource};
use crate::codec::{ImageCodec, ImageCrateCodec};
use crate::config::ComparisonConfig;
use crate::diff::{CompareOptions, DiffEngine, DiffImage, DiffRequest};
use crate::format::{resolve_for, EncodeSettings};
use crate::store::{ArtifactStore, KeyLocks};
use crate::utils::config::{DIFF_SUFFIX, NEW_SUFFIX};
use crate::utils::error::CompareError;

/// Collaborators a comparison runs against
#[derive(Clone)]
pub struct Services {
    pub diff: Arc<dyn DiffEngine>,
    pub codec: Arc<dyn ImageCodec>,
    pub store: ArtifactStore,

    /// Serializes invocations that share a baseline file
    pub locks: Arc<KeyLocks>,
}

impl Services {
    /// Services with the default `image` crate codec
    pub fn new(diff: Arc<dyn DiffEngine>) -> Self {
        Self {
            diff,
            codec: Arc::new(ImageCrateCodec::new()),
            store: ArtifactStore::new(),
            locks: Arc::new(KeyLocks::new()),
        }
    }
}

/// One test invocation
pub struct TestInvocation<'a> {
    pub capture: &'a dyn CaptureSource,

    /// Test name; "test" when `None`
    pub name: Option<&'a str>,

    pub options: CaptureOptions,
}

/// Run one comparison under `config`
///
/// # Returns
/// The outcome; `outcome.passed` is the verdict
///
/// # Errors
/// * `CompareError::Capture` - The capture source failed
/// * `CompareError::Diff` - The diff engine failed
/// * `CompareError::Format` - The target extension has no codec (only
///   checked when something has to be written)
/// * `CompareError::Codec` / `CompareError::Store` - Saving a first-run
///   baseline failed. Failed artifact writes after a mismatch do not
///   error; they are logged and listed in `outcome.write_failures`.
pub async fn compare(
    config: &ComparisonConfig,
    services: &Services,
    invocation: TestInvocation<'_>,
) -> Result<Outcome, CompareError> {
    let TestInvocation {
        capture,
        name,
        mut options,
    } = invocation;

    // Step 1: Resolve where the baseline lives
    let target = resolve_target(&config.base_dir, name, &mut options);
    let _guard = services.locks.acquire(&target.baseline_path()).await;
    debug!("Target for '{}': {}", target.name, target.baseline_path().display());

    // Step 2: Look up the baseline
    let baseline = services
        .store
        .read(&target.folder, &target.name, &target.ext)
        .await;

    // Step 3: Capture
    let screenshot = capture.screenshot(&options).await?;
    debug!("Captured {} bytes for '{}'", screenshot.len(), target.name);

    match baseline {
        None => bootstrap(config, services, &target, &screenshot).await,
        Some(baseline) => {
            compare_with_baseline(config, services, &target, &options, &baseline, &screenshot)
                .await
        }
    }
}

/// First run: the capture becomes the baseline
async fn bootstrap(
    config: &ComparisonConfig,
    services: &Services,
    target: &Target,
    screenshot: &[u8],
) -> Result<Outcome, CompareError> {
    let settings = resolve_for(&target.ext, &config.output_settings)?;
    let bytes = services.codec.transcode(screenshot, settings)?;

    let path = services
        .store
        .write(&target.folder, &target.name, "", &target.ext, &bytes)
        .await?;

    info!(
        "Nothing to compare for '{}', capture saved as baseline: {}",
        target.name,
        path.display()
    );

    Ok(Outcome::bootstrapped(&target.name, config.threshold, path))
}

async fn compare_with_baseline(
    config: &ComparisonConfig,
    services: &Services,
    target: &Target,
    options: &CaptureOptions,
    baseline: &[u8],
    screenshot: &[u8],
) -> Result<Outcome, CompareError> {
    let compare_options = CompareOptions::from_config(config);

    let result = services
        .diff
        .compare(DiffRequest {
            baseline,
            capture: screenshot,
            options: &compare_options,
            render: &config.error_settings,
        })
        .await?;

    let mut outcome = Outcome::compared(
        &target.name,
        config.threshold,
        result.is_same_dimensions,
        result.mismatch_percentage,
    );

    if outcome.passed {
        debug!(
            "'{}' matches baseline ({:.2}% <= {}%)",
            target.name, result.mismatch_percentage, config.threshold
        );
        return Ok(outcome);
    }

    info!(
        "'{}' differs from baseline: {:.2}% mismatch (threshold {}%), same dimensions: {}",
        target.name, result.mismatch_percentage, config.threshold, result.is_same_dimensions
    );

    // Step 6: Failure artifacts
    let settings = resolve_for(&target.ext, &config.output_settings)?;

    let capture_suffix = if options.overwrite_image_on_change {
        Some("")
    } else if options.save_new_image_on_error {
        Some(NEW_SUFFIX)
    } else {
        None
    };

    let diff_write = write_diff(services, target, result.diff_image, settings);
    let capture_write = async {
        match capture_suffix {
            Some(suffix) => write_capture(services, target, suffix, screenshot, settings)
                .await
                .map(Some),
            None => Ok(None),
        }
    };

    let (diff_written, capture_written) = tokio::join!(diff_write, capture_write);

    record_write(&mut outcome, "diff image", diff_written.map(Some));
    record_write(&mut outcome, "capture", capture_written);

    Ok(outcome)
}

async fn write_diff(
    services: &Services,
    target: &Target,
    diff_image: DiffImage,
    settings: EncodeSettings,
) -> Result<PathBuf, CompareError> {
    let image: DynamicImage = diff_image.produce()?;
    let bytes = services.codec.encode(&image, settings)?;

    let path = services
        .store
        .write(&target.folder, &target.name, DIFF_SUFFIX, &target.ext, &bytes)
        .await?;
    Ok(path)
}

async fn write_capture(
    services: &Services,
    target: &Target,
    suffix: &str,
    screenshot: &[u8],
    settings: EncodeSettings,
) -> Result<PathBuf, CompareError> {
    let bytes = services.codec.transcode(screenshot, settings)?;

    let path = services
        .store
        .write(&target.folder, &target.name, suffix, &target.ext, &bytes)
        .await?;
    Ok(path)
}

fn record_write(
    outcome: &mut Outcome,
    what: &str,
    written: Result<Option<PathBuf>, CompareError>,
) {
    match written {
        Ok(Some(path)) => outcome.artifacts.push(path),
        Ok(None) => {}
        Err(e) => {
            error!("Failed to save {} for '{}': {}", what, outcome.name, e);
            outcome.write_failures.push(format!("{}: {}", what, e));
        }
    }
}
