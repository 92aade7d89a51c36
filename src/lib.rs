//! Shot Compare
//!
//! Visual regression checks for screenshots: compare a fresh capture
//! against a stored baseline under a configurable tolerance, and keep
//! diff images when they disagree.
//!
//! ## Getting Started
//!
//! ```ignore
//! use shot_compare::{CaptureOptions, ComparisonConfig, ScreenComparator};
//!
//! let comparator = ScreenComparator::configure(
//!     ComparisonConfig::new("tests/screens").with_threshold(0.1),
//!     Arc::new(MyDiffEngine::default()),
//! );
//!
//! // first run saves tests/screens/home.png and passes
//! assert!(comparator.invoke(&page, Some("home"), CaptureOptions::new()).await?);
//! ```
//!
//! Capturing and pixel diffing are left to the caller through the
//! `CaptureSource` and `DiffEngine` traits.

pub mod capture;
pub mod codec;
pub mod commands;
pub mod config;
pub mod diff;
pub mod engine;
pub mod format;
pub mod output;
pub mod store;
pub mod utils;

pub use capture::{CaptureOptions, CaptureSource, StaticCapture};
pub use config::{load_config, ComparisonConfig, MatchingBox, Rect};
pub use diff::{ComparisonResult, DiffEngine, DiffImage, DiffRequest};
pub use engine::{Outcome, ScreenComparator, VerdictStatus};
pub use utils::error::CompareError;
