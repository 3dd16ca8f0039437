use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgN8nSkillsError {
    #[error("Source .agent folder not found in package: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error(".agent folder already exists at {}. Use --force to overwrite existing installation.", .0.display())]
    TargetExists(PathBuf),

    #[error("No existing installation found at {}. Run the 'init' command first.", .0.display())]
    NoExistingInstallation(PathBuf),

    #[error("Failed to copy {}: {source}", .path.display())]
    CopyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not resolve target directory: {0}")]
    TargetResolution(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgN8nSkillsError {
    /// Whether re-running the command with different flags can fix this.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            AgN8nSkillsError::TargetExists(_) | AgN8nSkillsError::NoExistingInstallation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AgN8nSkillsError>;
