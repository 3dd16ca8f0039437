use crate::cli::InitCmd;
use crate::commands::helpers::CommandContext;
use crate::error::Result;
use crate::install::{ConsoleReporter, InstallOptions, Outcome};

pub fn execute(cmd: &InitCmd) -> Result<Outcome> {
    let ctx = CommandContext::prepare(&cmd.target)?;
    let mut reporter = ConsoleReporter::new(ctx.config.quiet());

    let options = InstallOptions {
        force: cmd.force,
        dry_run: cmd.dry_run,
    };
    Ok(ctx.installer().install(options, &mut reporter))
}
