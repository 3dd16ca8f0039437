//! Read-only inspection of an installation target.

use crate::target::InstallationTarget;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Agent definitions directory inside `.agent`.
pub const AGENTS_DIR: &str = "agents";
/// Skills directory inside `.agent`.
pub const SKILLS_DIR: &str = "skills";
/// Extension an agent definition must carry to be counted.
pub const AGENT_EXTENSION: &str = "md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    Absent,
    Present,
}

impl InstallationState {
    pub fn of(target: &InstallationTarget) -> Self {
        if check_installed(target) {
            InstallationState::Present
        } else {
            InstallationState::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == InstallationState::Present
    }
}

/// Summary printed by `status`. A `None` count means the directory is
/// missing, which is not the same as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallStatus {
    pub installed: bool,
    pub agent_count: Option<usize>,
    pub skill_count: Option<usize>,
}

/// True when `<target>/.agent` exists. Never fails: anything that
/// cannot be stat'ed counts as absent.
pub fn check_installed(target: &InstallationTarget) -> bool {
    target.marker_path().exists()
}

pub fn describe_status(target: &InstallationTarget) -> InstallStatus {
    if !check_installed(target) {
        return InstallStatus {
            installed: false,
            agent_count: None,
            skill_count: None,
        };
    }

    let marker = target.marker_path();
    InstallStatus {
        installed: true,
        agent_count: count_entries(&marker.join(AGENTS_DIR), is_agent_definition),
        skill_count: count_entries(&marker.join(SKILLS_DIR), |_| true),
    }
}

/// Agent and skill names shipped in a bundle, for the post-install summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub agents: Vec<String>,
    pub skills: Vec<String>,
}

impl Manifest {
    /// Read agent and skill names from a `.agent` folder. Missing
    /// subdirectories produce empty lists.
    pub fn read(marker: &Path) -> Self {
        Self {
            agents: list_names(&marker.join(AGENTS_DIR), is_agent_definition),
            skills: list_names(&marker.join(SKILLS_DIR), |_| true),
        }
    }
}

fn list_names(dir: &Path, keep: impl Fn(&Path) -> bool) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| keep(&entry.path()))
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

fn is_agent_definition(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(AGENT_EXTENSION)
}

/// Count immediate entries of `dir` accepted by `keep`, or `None` when
/// `dir` is not a readable directory.
fn count_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Option<usize> {
    if !dir.is_dir() {
        return None;
    }

    match fs::read_dir(dir) {
        Ok(entries) => Some(
            entries
                .flatten()
                .filter(|entry| keep(&entry.path()))
                .count(),
        ),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "could not list directory");
            None
        }
    }
}
