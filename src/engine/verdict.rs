//! Pass/fail policy and the per-invocation outcome record.

use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;

/// How an invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    /// No baseline existed; the capture became the baseline
    Bootstrapped,
    Passed,
    Failed,
}

/// Apply the threshold policy to a diff result.
///
/// Fails when dimensions differ, or when the mismatch is strictly above
/// the threshold. A NaN mismatch is not "above" anything and passes.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_match(is_same_dimensions: bool, mismatch_percentage: f64, threshold: f64) -> bool {
    is_same_dimensions && !(mismatch_percentage > threshold)
}

/// Everything known about one finished invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub name: String,
    pub status: VerdictStatus,
    pub passed: bool,
    pub threshold: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_percentage: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_dimensions: Option<bool>,

    /// Files written by this invocation
    pub artifacts: Vec<PathBuf>,

    /// Artifact writes that failed; the verdict stands regardless
    pub write_failures: Vec<String>,

    pub completed_at: String,
}

impl Outcome {
    pub fn bootstrapped(name: &str, threshold: f64, baseline: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            status: VerdictStatus::Bootstrapped,
            passed: true,
            threshold,
            mismatch_percentage: None,
            same_dimensions: None,
            artifacts: vec![baseline],
            write_failures: Vec::new(),
            completed_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn compared(
        name: &str,
        threshold: f64,
        is_same_dimensions: bool,
        mismatch_percentage: f64,
    ) -> Self {
        let passed = is_match(is_same_dimensions, mismatch_percentage, threshold);
        Self {
            name: name.to_string(),
            status: if passed {
                VerdictStatus::Passed
            } else {
                VerdictStatus::Failed
            },
            passed,
            threshold,
            mismatch_percentage: Some(mismatch_percentage),
            same_dimensions: Some(is_same_dimensions),
            artifacts: Vec::new(),
            write_failures: Vec::new(),
            completed_at: Utc::now().to_rfc3339(),
        }
    }
}
