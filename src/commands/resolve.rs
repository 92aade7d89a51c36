//! Resolve command: where would a capture path be stored, and how encoded.

use anyhow::Result;
use std::path::PathBuf;

use crate::capture::CaptureOptions;
use crate::engine::{resolve_target, Target};
use crate::format::{resolve, EncodeSettings};
use crate::store::ArtifactStore;
use crate::utils::config::{DIFF_SUFFIX, NEW_SUFFIX};

/// Arguments for the resolve command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    /// Folder used when the path names no file
    pub base_dir: PathBuf,

    /// Capture path to resolve
    pub path: PathBuf,

    /// Explicit output format override
    pub force_ext: Option<String>,

    /// Quality/compression override
    pub compression: Option<u32>,
}

impl Default for ResolveArgs {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            path: PathBuf::from("test.png"),
            force_ext: None,
            compression: None,
        }
    }
}

/// Resolved locations and encoding for one capture path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target: Target,
    pub settings: EncodeSettings,
}

impl Resolution {
    pub fn diff_path(&self) -> PathBuf {
        artifact(&self.target, DIFF_SUFFIX)
    }

    pub fn new_image_path(&self) -> PathBuf {
        artifact(&self.target, NEW_SUFFIX)
    }
}

fn artifact(target: &Target, suffix: &str) -> PathBuf {
    ArtifactStore::artifact_path(&target.folder, &target.name, suffix, &target.ext)
}

/// Work out target and encoding for a capture path
///
/// # Errors
/// * The resolved format is not png, jpg, jpeg or webp
pub fn describe_resolution(args: &ResolveArgs) -> Result<Resolution> {
    let mut options = CaptureOptions::new().with_path(&args.path);
    let target = resolve_target(&args.base_dir, None, &mut options);
    let settings = resolve(&target.ext, args.force_ext.as_deref(), args.compression)?;

    Ok(Resolution { target, settings })
}

/// Print the resolution of a capture path
///
/// **Public** - main entry point called from main.rs
pub fn resolve_path(args: &ResolveArgs) -> Result<()> {
    let resolution = describe_resolution(args)?;

    println!("Baseline:  {}", resolution.target.baseline_path().display());
    println!("Diff:      {}", resolution.diff_path().display());
    println!("New image: {}", resolution.new_image_path().display());
    println!(
        "Encoding:  {} (quality {})",
        resolution.settings.format, resolution.settings.quality
    );

    Ok(())
}
