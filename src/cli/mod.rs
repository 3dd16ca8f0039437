use clap::{Args, Parser, Subcommand};

pub mod flags;
pub use flags::TargetFlags;

#[derive(Parser, Debug)]
#[command(name = "ag-n8n-skills")]
#[command(about = "🤖 n8n Automation Expert Agent with Skills for Antigravity IDE", long_about = None)]
#[command(version = env!("AG_N8N_SKILLS_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  ag-n8n-skills init                   Install .agent into the current directory
  ag-n8n-skills init -p ./my-project   Install into another directory
  ag-n8n-skills init --dry-run         Show what would be installed
  ag-n8n-skills update                 Overwrite an existing installation
  ag-n8n-skills status                 Check installation status

For details about a specific command, use:
  ag-n8n-skills <command> --help")]
pub struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install .agent folder with n8n skills into your project
    Init(InitCmd),

    /// Update existing installation to latest version
    #[command(long_about = "Update existing installation to latest version.\n\n\
        Requires an existing .agent folder. Every bundled file is copied over\n\
        the installed one; files you added yourself are left in place.")]
    Update(UpdateCmd),

    /// Check installation status
    Status(StatusCmd),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitCmd {
    #[command(flatten)]
    pub target: TargetFlags,

    /// Overwrite existing .agent folder
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Preview actions without executing
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateCmd {
    #[command(flatten)]
    pub target: TargetFlags,

    /// Preview actions without executing
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatusCmd {
    #[command(flatten)]
    pub target: TargetFlags,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}
