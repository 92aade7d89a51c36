//! Where an invocation's baseline lives.

use std::path::{Path, PathBuf};

use crate::capture::CaptureOptions;
use crate::utils::config::{DEFAULT_EXTENSION, DEFAULT_TEST_NAME};

/// Folder, name and extension of a baseline; artifacts share them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub folder: PathBuf,
    pub name: String,

    /// Extension with its leading dot (".png")
    pub ext: String,
}

impl Target {
    /// Path of the baseline file itself
    pub fn baseline_path(&self) -> PathBuf {
        self.folder.join(format!("{}{}", self.name, self.ext))
    }
}

/// Work out the target of an invocation
///
/// Defaults: `base_dir`, the given name (or "test"), and `.{type}` when the
/// capture options name a type, else `.png`. A `path` in the options wins
/// when it has a non-empty file stem: its directory, stem and extension
/// (`.png` if it has none) replace the defaults. The `path` is always taken
/// out of `options`, so the capture source never sees it.
///
/// # Example
/// ```ignore
/// let mut options = CaptureOptions::new().with_path("/out/shot.jpg");
/// let target = resolve_target(Path::new("/suite"), Some("home"), &mut options);
/// assert_eq!(target.folder, PathBuf::from("/out"));
/// assert_eq!(target.name, "shot");
/// assert_eq!(target.ext, ".jpg");
/// ```
pub fn resolve_target(base_dir: &Path, name: Option<&str>, options: &mut CaptureOptions) -> Target {
    let mut target = Target {
        folder: base_dir.to_path_buf(),
        name: name.unwrap_or(DEFAULT_TEST_NAME).to_string(),
        ext: options
            .image_type
            .as_deref()
            .map(|t| format!(".{}", t))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
    };

    if let Some(path) = options.path.take() {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !stem.is_empty() {
            target.folder = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            target.ext = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            target.name = stem;
        }
    }

    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let mut options = CaptureOptions::new();
        let target = resolve_target(Path::new("/suite"), None, &mut options);

        assert_eq!(
            target,
            Target {
                folder: PathBuf::from("/suite"),
                name: "test".to_string(),
                ext: ".png".to_string(),
            }
        );
    }

    #[test]
    fn test_capture_type_sets_extension() {
        let mut options = CaptureOptions::new().with_type("jpeg");
        let target = resolve_target(Path::new("/suite"), Some("home"), &mut options);

        assert_eq!(target.name, "home");
        assert_eq!(target.ext, ".jpeg");
    }

    #[test]
    fn test_path_overrides_everything() {
        let mut options = CaptureOptions::new().with_type("webp").with_path("/out/shot.jpg");
        let target = resolve_target(Path::new("/suite"), Some("home"), &mut options);

        assert_eq!(target.folder, PathBuf::from("/out"));
        assert_eq!(target.name, "shot");
        assert_eq!(target.ext, ".jpg");
        assert_eq!(target.baseline_path(), PathBuf::from("/out/shot.jpg"));
        assert!(options.path.is_none());
    }

    #[test]
    fn test_path_without_extension_defaults_to_png() {
        let mut options = CaptureOptions::new().with_type("jpeg").with_path("/out/shot");
        let target = resolve_target(Path::new("/suite"), None, &mut options);

        assert_eq!(target.name, "shot");
        assert_eq!(target.ext, ".png");
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let mut options = CaptureOptions::new().with_path("shot.webp");
        let target = resolve_target(Path::new("/suite"), None, &mut options);

        assert_eq!(target.folder, PathBuf::from("."));
        assert_eq!(target.ext, ".webp");
    }

    #[test]
    fn test_path_without_stem_is_ignored_but_stripped() {
        let mut options = CaptureOptions::new().with_path("/");
        let target = resolve_target(Path::new("/suite"), Some("home"), &mut options);

        assert_eq!(target.folder, PathBuf::from("/suite"));
        assert_eq!(target.name, "home");
        assert!(options.path.is_none());
    }
}
