//! Baseline and artifact files on disk.
//!
//! Paths are always `{folder}/{name}{suffix}{ext}`. Writes go straight to
//! the destination (no temp file + rename), so a crash mid-write can leave
//! a truncated file behind.

use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::utils::error::StoreError;

/// Reads baselines and writes diff/new/baseline images
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactStore;

impl ArtifactStore {
    pub fn new() -> Self {
        Self
    }

    /// Build the path of an artifact
    pub fn artifact_path(folder: &Path, name: &str, suffix: &str, ext: &str) -> PathBuf {
        folder.join(format!("{}{}{}", name, suffix, ext))
    }

    /// Read the baseline for `(folder, name, ext)`
    ///
    /// # Returns
    /// The file bytes, or `None` when the baseline is missing or unreadable.
    /// Absence is the first-run state, not an error.
    pub async fn read(&self, folder: &Path, name: &str, ext: &str) -> Option<Vec<u8>> {
        let path = Self::artifact_path(folder, name, "", ext);

        match fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read baseline {} ({} bytes)", path.display(), bytes.len());
                Some(bytes)
            }
            Err(e) => {
                debug!("No baseline at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Write encoded bytes to `{folder}/{name}{suffix}{ext}`
    ///
    /// # Returns
    /// The path written
    ///
    /// # Errors
    /// * `StoreError::WriteFailed` - If the folder cannot be created or the file written
    pub async fn write(
        &self,
        folder: &Path,
        name: &str,
        suffix: &str,
        ext: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, StoreError> {
        let path = Self::artifact_path(folder, name, suffix, ext);

        if !folder.as_os_str().is_empty() {
            fs::create_dir_all(folder)
                .await
                .map_err(|source| StoreError::WriteFailed {
                    path: path.clone(),
                    source,
                })?;
        }

        fs::write(&path, bytes)
            .await
            .map_err(|source| StoreError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        info!("✓ Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path() {
        let path = ArtifactStore::artifact_path(Path::new("/out"), "home", "-diff", ".png");
        assert_eq!(path, PathBuf::from("/out/home-diff.png"));
    }

    #[tokio::test]
    async fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new();
        assert!(store.read(dir.path(), "missing", ".png").await.is_none());
    }

    #[tokio::test]
    async fn test_read_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("shot.png")).unwrap();

        let store = ArtifactStore::new();
        assert!(store.read(dir.path(), "shot", ".png").await.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new();

        let written = store
            .write(dir.path(), "shot", "", ".png", b"bytes")
            .await
            .unwrap();
        assert_eq!(written, dir.path().join("shot.png"));

        let read = store.read(dir.path(), "shot", ".png").await;
        assert_eq!(read.as_deref(), Some(&b"bytes"[..]));
    }

    #[tokio::test]
    async fn test_write_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/shots");

        let store = ArtifactStore::new();
        store
            .write(&nested, "shot", "-new", ".jpg", b"x")
            .await
            .unwrap();

        assert!(nested.join("shot-new.jpg").exists());
    }

    #[tokio::test]
    async fn test_write_over_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("shot.png")).unwrap();

        let store = ArtifactStore::new();
        let result = store.write(dir.path(), "shot", "", ".png", b"x").await;
        assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
    }
}
