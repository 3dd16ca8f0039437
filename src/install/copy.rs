//! Recursive, additive directory copy.

use crate::error::{AgN8nSkillsError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyPolicy {
    pub overwrite: bool,
}

impl CopyPolicy {
    pub fn overwrite(overwrite: bool) -> Self {
        Self { overwrite }
    }
}

/// What a finished copy touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files_copied: usize,
    pub files_overwritten: usize,
    pub dirs_created: usize,
}

/// Copy the tree at `src` into `dest`.
///
/// Files already in `dest` but not in `src` are never removed. Without
/// `overwrite`, every destination path is checked before the first write
/// and any existing file aborts the copy with `TargetExists`. A failure
/// part way through leaves whatever was already written.
pub fn copy_tree(src: &Path, dest: &Path, policy: CopyPolicy) -> Result<CopyReport> {
    if !src.is_dir() {
        return Err(AgN8nSkillsError::SourceMissing(src.to_path_buf()));
    }

    let plan = plan_copy(src, dest)?;

    if !policy.overwrite {
        if let Some(conflict) = plan.iter().find_map(|step| step.conflict()) {
            return Err(AgN8nSkillsError::TargetExists(conflict.to_path_buf()));
        }
    }

    let mut report = CopyReport::default();
    if !dest.is_dir() {
        create_dir(dest)?;
        report.dirs_created += 1;
    }

    for step in &plan {
        match step {
            CopyStep::Dir { to } => {
                if !to.is_dir() {
                    create_dir(to)?;
                    report.dirs_created += 1;
                }
            }
            CopyStep::File { from, to } => {
                let existed = to.exists();
                fs::copy(from, to).map_err(|source| AgN8nSkillsError::CopyIo {
                    path: to.clone(),
                    source,
                })?;
                if existed {
                    report.files_overwritten += 1;
                } else {
                    report.files_copied += 1;
                }
            }
        }
    }

    tracing::debug!(
        copied = report.files_copied,
        overwritten = report.files_overwritten,
        dirs = report.dirs_created,
        "copy finished"
    );
    Ok(report)
}

#[derive(Debug)]
enum CopyStep {
    Dir { to: PathBuf },
    File { from: PathBuf, to: PathBuf },
}

impl CopyStep {
    /// Destination that would be clobbered without overwrite.
    fn conflict(&self) -> Option<&Path> {
        match self {
            CopyStep::Dir { to } if to.exists() && !to.is_dir() => Some(to),
            CopyStep::File { to, .. } if to.exists() => Some(to),
            _ => None,
        }
    }
}

/// Walk `src` once, parents before children, and pair every entry with
/// its destination.
fn plan_copy(src: &Path, dest: &Path) -> Result<Vec<CopyStep>> {
    let mut steps = Vec::new();

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| src.to_path_buf());
            AgN8nSkillsError::CopyIo {
                path,
                source: e.into(),
            }
        })?;

        let to = dest.join(relative_to(entry.path(), src)?);

        if entry.file_type().is_dir() {
            steps.push(CopyStep::Dir { to });
        } else {
            steps.push(CopyStep::File {
                from: entry.path().to_path_buf(),
                to,
            });
        }
    }

    Ok(steps)
}

/// `path` with the walk root stripped. WalkDir only yields paths under
/// the root, so a failure here is reported as a copy error on `path`.
fn relative_to<'a>(path: &'a Path, root: &Path) -> Result<&'a Path> {
    path.strip_prefix(root).map_err(|e| AgN8nSkillsError::CopyIo {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, e),
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| AgN8nSkillsError::CopyIo {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_source() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("agents")).unwrap();
        fs::create_dir_all(root.join("skills/workflow-patterns")).unwrap();
        fs::write(root.join("agents/expert.md"), "# expert v2").unwrap();
        fs::write(
            root.join("skills/workflow-patterns/SKILL.md"),
            "# patterns v2",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_copy_into_missing_destination() {
        let src = sample_source();
        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join("nested/project/.agent");

        let report = copy_tree(src.path(), &dest, CopyPolicy::default()).unwrap();

        assert_eq!(report.files_copied, 2);
        assert_eq!(report.files_overwritten, 0);
        assert_eq!(
            fs::read_to_string(dest.join("agents/expert.md")).unwrap(),
            "# expert v2"
        );
        assert!(dest.join("skills/workflow-patterns/SKILL.md").is_file());
    }

    #[test]
    fn test_no_overwrite_conflict_writes_nothing() {
        let src = sample_source();
        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join(".agent");
        fs::create_dir_all(dest.join("skills/workflow-patterns")).unwrap();
        fs::write(
            dest.join("skills/workflow-patterns/SKILL.md"),
            "# patterns v1",
        )
        .unwrap();

        let err = copy_tree(src.path(), &dest, CopyPolicy::overwrite(false)).unwrap_err();

        assert!(matches!(err, AgN8nSkillsError::TargetExists(_)));
        // The non-conflicting file must not have been written either
        assert!(!dest.join("agents").exists());
        assert_eq!(
            fs::read_to_string(dest.join("skills/workflow-patterns/SKILL.md")).unwrap(),
            "# patterns v1"
        );
    }

    #[test]
    fn test_overwrite_keeps_extraneous_files() {
        let src = sample_source();
        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join(".agent");
        fs::create_dir_all(dest.join("agents")).unwrap();
        fs::write(dest.join("agents/expert.md"), "# expert v1").unwrap();
        fs::write(dest.join("agents/custom.md"), "# mine").unwrap();

        let report = copy_tree(src.path(), &dest, CopyPolicy::overwrite(true)).unwrap();

        assert_eq!(report.files_overwritten, 1);
        assert_eq!(report.files_copied, 1);
        assert_eq!(
            fs::read_to_string(dest.join("agents/expert.md")).unwrap(),
            "# expert v2"
        );
        assert_eq!(
            fs::read_to_string(dest.join("agents/custom.md")).unwrap(),
            "# mine"
        );
    }

    #[test]
    fn test_missing_source() {
        let dest_root = TempDir::new().unwrap();
        let err = copy_tree(
            Path::new("/nonexistent/bundle/.agent"),
            &dest_root.path().join(".agent"),
            CopyPolicy::overwrite(true),
        )
        .unwrap_err();

        assert!(matches!(err, AgN8nSkillsError::SourceMissing(_)));
        assert!(!dest_root.path().join(".agent").exists());
    }

    #[test]
    fn test_file_in_place_of_directory_is_a_conflict() {
        let src = sample_source();
        let dest_root = TempDir::new().unwrap();
        let dest = dest_root.path().join(".agent");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("agents"), "blocking file").unwrap();

        let err = copy_tree(src.path(), &dest, CopyPolicy::overwrite(false)).unwrap_err();
        assert!(matches!(err, AgN8nSkillsError::TargetExists(_)));
    }

    #[test]
    fn test_path_outside_walk_root_is_a_copy_error() {
        assert_eq!(
            relative_to(Path::new("/bundle/.agent/agents/a.md"), Path::new("/bundle/.agent"))
                .unwrap(),
            Path::new("agents/a.md")
        );

        let err = relative_to(Path::new("/elsewhere/a.md"), Path::new("/bundle/.agent"))
            .unwrap_err();
        match err {
            AgN8nSkillsError::CopyIo { path, source } => {
                assert_eq!(path, PathBuf::from("/elsewhere/a.md"));
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
            }
            other => panic!("expected CopyIo, got {other:?}"),
        }
    }
}
