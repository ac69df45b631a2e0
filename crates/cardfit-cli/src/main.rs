//! `cardfit` CLI entrypoint.
//!
//! Parses args, sets up logging and dispatches to the `cli` module.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cardfit={log_level},cardfit_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = cli::run(args) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
