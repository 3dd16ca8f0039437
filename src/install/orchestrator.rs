//! Install/update state machine for the `.agent` folder.
//!
//! ```text
//! Start ──(present, no overwrite)──▶ Refused
//!   │
//!   ├──(dry run)──────────────────▶ DryRunPreview
//!   │
//!   └──▶ Installing ──▶ Succeeded | Failed
//! ```
//!
//! `update` checks that an installation exists, then re-enters at the dry
//! run check with overwrite forced on. Nothing here exits the process: the
//! caller maps the returned [`Outcome`] to an exit code.

use crate::bundle::BundleSource;
use crate::error::AgN8nSkillsError;
use crate::install::copy::{copy_tree, CopyPolicy, CopyReport};
use crate::install::report::{Event, Reporter};
use crate::install::state::{InstallationState, Manifest};
use crate::target::InstallationTarget;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    pub force: bool,
    pub dry_run: bool,
}

/// Intended action reported by a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub source: PathBuf,
    pub target: PathBuf,
    pub overwrite: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Succeeded { copy: CopyReport, manifest: Manifest },
    DryRunPreview(Preview),
    /// `TargetExists` or `NoExistingInstallation`; nothing was touched
    Refused(AgN8nSkillsError),
    /// The copy started (or could not start) and failed
    Failed(AgN8nSkillsError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. } | Outcome::DryRunPreview(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn error(&self) -> Option<&AgN8nSkillsError> {
        match self {
            Outcome::Refused(err) | Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

pub struct Installer {
    source: BundleSource,
    target: InstallationTarget,
}

impl Installer {
    pub fn new(source: BundleSource, target: InstallationTarget) -> Self {
        Self { source, target }
    }

    /// `init`: refuse over an existing install unless forced.
    pub fn install(&self, options: InstallOptions, reporter: &mut dyn Reporter) -> Outcome {
        let marker = self.target.marker_path();
        let state = InstallationState::of(&self.target);
        tracing::debug!(path = %marker.display(), ?state, ?options, "install requested");

        if state.is_present() && !options.force {
            reporter.report(&Event::Refused { marker: &marker });
            return Outcome::Refused(AgN8nSkillsError::TargetExists(marker));
        }

        self.copy_or_preview(CopyPolicy::overwrite(options.force), options.dry_run, reporter)
    }

    /// `update`: requires an existing install, always overwrites.
    pub fn update(&self, dry_run: bool, reporter: &mut dyn Reporter) -> Outcome {
        let marker = self.target.marker_path();
        tracing::debug!(path = %marker.display(), dry_run, "update requested");

        if !InstallationState::of(&self.target).is_present() {
            reporter.report(&Event::NoInstallation { marker: &marker });
            return Outcome::Refused(AgN8nSkillsError::NoExistingInstallation(marker));
        }

        self.copy_or_preview(CopyPolicy::overwrite(true), dry_run, reporter)
    }

    fn copy_or_preview(
        &self,
        policy: CopyPolicy,
        dry_run: bool,
        reporter: &mut dyn Reporter,
    ) -> Outcome {
        let marker = self.target.marker_path();
        let source = self.source.path();

        if dry_run {
            reporter.report(&Event::DryRun {
                source,
                target: &marker,
                overwrite: policy.overwrite,
            });
            return Outcome::DryRunPreview(Preview {
                source: source.to_path_buf(),
                target: marker,
                overwrite: policy.overwrite,
            });
        }

        reporter.report(&Event::Installing {
            source,
            target: &marker,
        });

        match copy_tree(source, &marker, policy) {
            Ok(copy) => {
                let manifest = Manifest::read(source);
                tracing::info!(
                    path = %marker.display(),
                    agents = manifest.agents.len(),
                    skills = manifest.skills.len(),
                    "installed"
                );
                reporter.report(&Event::Installed {
                    manifest: &manifest,
                });
                Outcome::Succeeded { copy, manifest }
            }
            Err(error) => {
                tracing::debug!(error = %error, "copy failed");
                reporter.report(&Event::Failed { error: &error });
                Outcome::Failed(error)
            }
        }
    }
}
