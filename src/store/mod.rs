//! Artifact store: baselines in, diff/new/baseline images out.

mod artifact;
mod locks;

pub use artifact::ArtifactStore;
pub use locks::KeyLocks;
