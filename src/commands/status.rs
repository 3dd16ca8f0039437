use crate::cli::{StatusCmd, TargetFlags};
use crate::commands::helpers::CommandContext;
use crate::error::Result;
use crate::install::{describe_status, ConsoleReporter, Event, InstallStatus, Reporter};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct StatusReport {
    location: PathBuf,
    #[serde(flatten)]
    status: InstallStatus,
}

pub fn execute(cmd: &StatusCmd) -> Result<()> {
    // JSON output must stay parseable, so never print the banner with it
    let flags = TargetFlags {
        path: cmd.target.path.clone(),
        quiet: cmd.target.quiet || cmd.json,
    };
    let ctx = CommandContext::prepare(&flags)?;

    let location = ctx.target.marker_path();
    let status = describe_status(&ctx.target);

    if cmd.json {
        let report = StatusReport { location, status };
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{}", json);
        return Ok(());
    }

    ConsoleReporter::new(ctx.config.quiet()).report(&Event::Status {
        location: &location,
        status: &status,
    });
    Ok(())
}
