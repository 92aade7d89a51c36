//! Configure once, compare many times.

use log::{info, warn};
use std::sync::Arc;

use super::decision::{compare, Services, TestInvocation};
use super::verdict::Outcome;
use crate::capture::{CaptureOptions, CaptureSource};
use crate::codec::ImageCodec;
use crate::config::ComparisonConfig;
use crate::diff::DiffEngine;
use crate::utils::error::CompareError;

/// A reusable comparator bound to one immutable configuration.
///
/// Cheap to clone; clones share the configuration, the collaborators and
/// the per-baseline locks, so concurrent tests through any clone never race
/// on the same baseline file.
///
/// # Example
/// ```ignore
/// let comparator = ScreenComparator::configure(
///     ComparisonConfig::new("tests/screens").with_threshold(0.5),
///     Arc::new(MyDiffEngine::default()),
/// );
///
/// let passed = comparator.invoke(&page, Some("home"), CaptureOptions::new()).await?;
/// assert!(passed);
/// ```
#[derive(Clone)]
pub struct ScreenComparator {
    config: Arc<ComparisonConfig>,
    services: Services,
}

impl ScreenComparator {
    /// Bind a configuration and a diff engine.
    ///
    /// Never fails. Suspicious values (threshold outside 0-100 and the
    /// like) are accepted and logged as warnings.
    pub fn configure(config: ComparisonConfig, diff: Arc<dyn DiffEngine>) -> Self {
        for warning in config.warnings() {
            warn!("{}", warning);
        }

        info!(
            "Comparator configured: base dir {}, threshold {}%",
            config.base_dir.display(),
            config.threshold
        );

        Self {
            config: Arc::new(config),
            services: Services::new(diff),
        }
    }

    /// Replace the default `image` crate codec
    pub fn with_codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.services.codec = codec;
        self
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compare a fresh capture against its baseline
    ///
    /// # Arguments
    /// * `capture` - Source of the screenshot
    /// * `name` - Test name; "test" when `None`
    /// * `options` - Capture options (path override, artifact flags, encoder options)
    ///
    /// # Returns
    /// `true` when the capture matches (or became the first baseline)
    pub async fn invoke(
        &self,
        capture: &dyn CaptureSource,
        name: Option<&str>,
        options: CaptureOptions,
    ) -> Result<bool, CompareError> {
        let outcome = self.check(capture, name, options).await?;
        Ok(outcome.passed)
    }

    /// Like `invoke`, but returns the full outcome record
    pub async fn check(
        &self,
        capture: &dyn CaptureSource,
        name: Option<&str>,
        options: CaptureOptions,
    ) -> Result<Outcome, CompareError> {
        compare(
            &self.config,
            &self.services,
            TestInvocation {
                capture,
                name,
                options,
            },
        )
        .await
    }
}
