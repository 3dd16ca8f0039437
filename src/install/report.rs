//! Reporting of orchestrator progress, kept apart from the state machine.

use crate::error::AgN8nSkillsError;
use crate::install::state::{InstallStatus, Manifest};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

#[derive(Debug)]
pub enum Event<'a> {
    /// `.agent` exists and overwrite was not requested
    Refused { marker: &'a Path },
    /// `update` found nothing to update
    NoInstallation { marker: &'a Path },
    DryRun {
        source: &'a Path,
        target: &'a Path,
        overwrite: bool,
    },
    Installing { source: &'a Path, target: &'a Path },
    Installed { manifest: &'a Manifest },
    Failed { error: &'a AgN8nSkillsError },
    Status {
        location: &'a Path,
        status: &'a InstallStatus,
    },
}

impl Event<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Refused { .. } => "refused",
            Event::NoInstallation { .. } => "no-installation",
            Event::DryRun { .. } => "dry-run",
            Event::Installing { .. } => "installing",
            Event::Installed { .. } => "installed",
            Event::Failed { .. } => "failed",
            Event::Status { .. } => "status",
        }
    }
}

pub trait Reporter {
    fn report(&mut self, event: &Event<'_>);
}

/// Terminal reporter with a spinner around the copy.
#[derive(Default)]
pub struct ConsoleReporter {
    quiet: bool,
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: None,
        }
    }

    fn start_spinner(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map(|s| s.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"]))
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &Event<'_>) {
        match event {
            Event::Refused { marker } => {
                println!();
                println!("{}", style("⚠️  .agent folder already exists!").yellow());
                println!("   {}", style(marker.display()).dim());
                println!(
                    "{}",
                    style("   Use --force to overwrite existing installation.").dim()
                );
                println!();
            }
            Event::NoInstallation { marker } => {
                println!();
                println!("{}", style("⚠️  No existing installation found!").yellow());
                println!("   {}", style(marker.display()).dim());
                println!("{}", style("   Run \"init\" command first.").dim());
                println!();
            }
            Event::DryRun {
                source,
                target,
                overwrite,
            } => {
                println!();
                println!(
                    "{}",
                    style("🔍 Dry run mode - no changes will be made").cyan()
                );
                println!();
                println!("{}", style(format!("   Source: {}", source.display())).dim());
                println!("{}", style(format!("   Target: {}", target.display())).dim());
                println!("{}", style(format!("   Force:  {}", overwrite)).dim());
                println!();
            }
            Event::Installing { .. } => {
                self.start_spinner("Installing ag-n8n-skills...");
            }
            Event::Installed { manifest } => {
                self.stop_spinner();
                println!("{} {}", style("✔").green(), style("Installation complete!").green());
                print_manifest(manifest);
            }
            Event::Failed { error } => {
                self.stop_spinner();
                eprintln!("{} {}", style("✖").red(), style("Installation failed").red());
                eprintln!();
                eprintln!("   {}", style(error).red());
                eprintln!();
            }
            Event::Status { location, status } => print_status(location, status),
        }
    }
}

fn print_manifest(manifest: &Manifest) {
    println!();
    println!("{}", style("📦 Installed:").bold());
    println!("{}", style("   └── .agent/").dim());
    println!("{}", style("       ├── agents/").dim());
    for (i, agent) in manifest.agents.iter().enumerate() {
        let branch = if i + 1 == manifest.agents.len() {
            "└──"
        } else {
            "├──"
        };
        println!("{}", style(format!("       │   {} {}", branch, agent)).dim());
    }
    println!(
        "{}",
        style(format!(
            "       └── skills/ ({} skills)",
            manifest.skills.len()
        ))
        .dim()
    );

    println!();
    println!("{}", style("🚀 Quick Start:").bold());
    println!(
        "{}",
        style("   Ask your AI assistant to create n8n workflows!").cyan()
    );
    println!(
        "{}",
        style("   The agent will automatically be detected.").dim()
    );
    println!();
}

fn print_status(location: &Path, status: &InstallStatus) {
    println!();
    println!("{}", style("📊 Status:").bold());
    println!();

    if status.installed {
        println!("{}", style("   ✅ ag-n8n-skills is installed").green());
        println!(
            "{}",
            style(format!("   📁 Location: {}", location.display())).dim()
        );
        if let Some(count) = status.agent_count {
            println!("{}", style(format!("   🤖 Agents: {}", count)).dim());
        }
        if let Some(count) = status.skill_count {
            println!("{}", style(format!("   🛠️  Skills: {}", count)).dim());
        }
    } else {
        println!("{}", style("   ⚠️  Not installed").yellow());
        println!("{}", style("   Run: ag-n8n-skills init").dim());
    }
    println!();
}

/// Collects event kinds; used to check the state machine without
/// touching stdout.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<&'static str>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn report(&mut self, event: &Event<'_>) {
        self.events.push(event.kind());
    }
}
