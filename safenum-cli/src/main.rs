//! `safenum`: compute, verify and inspect numeric safety numbers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use safenum_app_core::logging::init_tracing;
use safenum_app_core::AppConfig;

use crate::args::{Cli, Command};
use crate::commands::Verification;

mod args;
mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            // Nothing reaches stdout on failure, so no partial number is shown.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(None, cli.log);
    init_tracing(&config.log_filter);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Compute(args) => {
            let fp = commands::fingerprint_for(&args.party).await?;
            println!("{}", commands::render(&fp, args.format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify(args) => match commands::verify(&args.party, &args.expected).await? {
            Verification::Match => {
                println!("match");
                Ok(ExitCode::SUCCESS)
            }
            Verification::Mismatch => {
                println!("MISMATCH");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Vectors => {
            println!("{}", commands::vectors()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Trust(args) => {
            println!("{}", commands::trust(&args, &config));
            Ok(ExitCode::SUCCESS)
        }
    }
}
