#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ag_n8n_skills::cli::{Cli, Commands};
use ag_n8n_skills::install::Outcome;
use ag_n8n_skills::{banner, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Some(Commands::Init(cmd)) => exit_code_for(commands::init::execute(cmd)?),
        Some(Commands::Update(cmd)) => exit_code_for(commands::update::execute(cmd)?),
        Some(Commands::Status(cmd)) => {
            commands::status::execute(cmd)?;
            0
        }
        None => {
            banner::print();
            Cli::command().print_help()?;
            println!();
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn exit_code_for(outcome: Outcome) -> i32 {
    if let Some(err) = outcome.error() {
        tracing::debug!(
            error = %err,
            recoverable = err.is_user_recoverable(),
            "command did not succeed"
        );
    }
    outcome.exit_code()
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ag_n8n_skills=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
