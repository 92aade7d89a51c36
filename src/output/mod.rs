//! Reporting: terminal summaries and JSON outcome files.

pub mod json;
pub mod terminal;

// Re-export main functions
pub use json::{outcome_to_string, write_outcomes};
pub use terminal::{render_config, render_outcome};
