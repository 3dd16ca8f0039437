use clap::Args;
use std::path::PathBuf;

/// Flags shared by every command that works on a target directory.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetFlags {
    /// Directory to operate on (defaults to the current directory)
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Suppress the banner and progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
