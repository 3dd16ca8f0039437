use crate::banner;
use crate::bundle::BundleSource;
use crate::cli::TargetFlags;
use crate::config::Config;
use crate::error::Result;
use crate::install::Installer;
use crate::target::InstallationTarget;

/// Everything a command needs once flags and config files have been
/// combined.
#[derive(Debug)]
pub struct CommandContext {
    pub target: InstallationTarget,
    pub config: Config,
}

impl CommandContext {
    /// Resolve the target, load config for it and print the banner unless
    /// output is quiet. A broken config file is logged and ignored so it
    /// never keeps a command from running.
    pub fn prepare(flags: &TargetFlags) -> Result<Self> {
        let target = InstallationTarget::resolve(flags.path.as_deref())?;
        let config = Config::load(target.root()).with_cli_overrides(flags.quiet);
        if config.show_banner() {
            banner::print();
        }
        Ok(Self { target, config })
    }

    pub fn installer(&self) -> Installer {
        let source = BundleSource::locate(self.config.source_override());
        Installer::new(source, self.target.clone())
    }
}
