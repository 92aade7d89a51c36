//! Format resolution for written artifacts (png, jpeg/jpg, webp).

mod resolver;

pub use resolver::{resolve, resolve_for, EncodeSettings, OutputFormat};
