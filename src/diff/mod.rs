//! Pixel-diff seam.
//!
//! The comparator does not measure pixel differences itself. A `DiffEngine`
//! receives the baseline, the capture, the masking options and the overlay
//! style, and reports whether dimensions match, what share of pixels
//! differs, and (on demand) a diff image.
//!
//! # Example
//! ```ignore
//! let options = CompareOptions::from_config(&config);
//! let result = engine.compare(DiffRequest {
//!     baseline: &baseline,
//!     capture: &capture,
//!     options: &options,
//!     render: &config.error_settings,
//! }).await?;
//! ```

mod request;
mod result;

pub use request::{CompareOptions, DiffRequest};
pub use result::{ComparisonResult, DiffImage};

use async_trait::async_trait;

use crate::utils::error::DiffError;

/// External pixel-diff capability
#[async_trait]
pub trait DiffEngine: Send + Sync {
    /// Compare a capture against a baseline
    async fn compare(&self, request: DiffRequest<'_>) -> Result<ComparisonResult, DiffError>;
}
