//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components and print to stdout.

pub mod resolve;
pub mod validate;

// Re-export main command functions
pub use resolve::{describe_resolution, resolve_path, Resolution, ResolveArgs};
pub use validate::{display_version, validate_config};
