//! Location of the packaged `.agent` folder that gets installed.

use crate::target::MARKER_DIR;
use std::path::{Path, PathBuf};

/// Where the bundled content lives and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSource {
    path: PathBuf,
}

impl BundleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the bundle: the configured override if any, otherwise the
    /// first existing candidate next to the executable. When nothing
    /// exists the first candidate is returned so the install reports it
    /// as missing.
    pub fn locate(source_override: Option<PathBuf>) -> Self {
        if let Some(path) = source_override {
            tracing::debug!(path = %path.display(), "using configured bundle source");
            return Self::new(path);
        }

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let candidates = candidate_paths(exe_dir.as_deref());

        let found = candidates.iter().find(|path| path.is_dir()).cloned();
        match found {
            Some(path) => {
                tracing::debug!(path = %path.display(), "found bundled .agent folder");
                Self::new(path)
            }
            None => {
                tracing::warn!(
                    searched = candidates.len(),
                    "no bundled .agent folder found next to the executable"
                );
                Self::new(
                    candidates
                        .into_iter()
                        .next()
                        .unwrap_or_else(|| PathBuf::from(MARKER_DIR)),
                )
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Candidate bundle locations in lookup order.
fn candidate_paths(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = exe_dir {
        candidates.push(dir.join(MARKER_DIR));
        if let Some(prefix) = dir.parent() {
            candidates.push(prefix.join(MARKER_DIR));
            candidates.push(
                prefix
                    .join("share")
                    .join(env!("CARGO_PKG_NAME"))
                    .join(MARKER_DIR),
            );
        }
    }

    // Running from a source checkout
    #[cfg(debug_assertions)]
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(MARKER_DIR));

    candidates
}
