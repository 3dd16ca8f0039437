use crate::cli::UpdateCmd;
use crate::commands::helpers::CommandContext;
use crate::error::Result;
use crate::install::{ConsoleReporter, Outcome};

pub fn execute(cmd: &UpdateCmd) -> Result<Outcome> {
    let ctx = CommandContext::prepare(&cmd.target)?;
    let mut reporter = ConsoleReporter::new(ctx.config.quiet());

    Ok(ctx.installer().update(cmd.dry_run, &mut reporter))
}
