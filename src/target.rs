use crate::error::{AgN8nSkillsError, Result};
use crate::utils::path::{absolutize, expand_tilde};
use std::path::{Path, PathBuf};

/// Name of the directory whose presence means "installed".
pub const MARKER_DIR: &str = ".agent";

/// Root directory an install/update/status command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationTarget {
    root: PathBuf,
}

impl InstallationTarget {
    /// Resolve the target from an optional `--path` override, falling back
    /// to the current directory.
    pub fn resolve(path_override: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            AgN8nSkillsError::TargetResolution(format!("Failed to get current directory: {}", e))
        })?;
        Ok(Self::resolve_from(path_override, &cwd))
    }

    /// Same as [`resolve`](Self::resolve) with an explicit base directory.
    pub fn resolve_from(path_override: Option<&Path>, cwd: &Path) -> Self {
        let root = match path_override {
            Some(path) => {
                let expanded = expand_tilde(path).unwrap_or_else(|| path.to_path_buf());
                absolutize(&expanded, cwd)
            }
            None => cwd.to_path_buf(),
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/.agent`
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_cwd() {
        let target = InstallationTarget::resolve_from(None, Path::new("/home/user/proj"));
        assert_eq!(target.root(), Path::new("/home/user/proj"));
        assert_eq!(
            target.marker_path(),
            PathBuf::from("/home/user/proj/.agent")
        );
    }

    #[test]
    fn test_resolve_relative_override() {
        let target = InstallationTarget::resolve_from(
            Some(Path::new("../workflows")),
            Path::new("/home/user/proj"),
        );
        assert_eq!(target.root(), Path::new("/home/user/workflows"));
    }

    #[test]
    fn test_resolve_absolute_override() {
        let target =
            InstallationTarget::resolve_from(Some(Path::new("/tmp/proj")), Path::new("/ignored"));
        assert_eq!(target.marker_path(), PathBuf::from("/tmp/proj/.agent"));
    }

    #[test]
    fn test_resolve_uses_process_cwd() {
        let target = InstallationTarget::resolve(None).unwrap();
        assert!(target.root().is_absolute());
    }
}
