//! SICEI CLI - Command-line interface for the school records
//!
//! Usage:
//!   sicei student create --name N --lastname L --email E --semester S
//!   sicei student list --page-size 10 --page 2 --sort-field average --sort-order desc
//!   sicei grade create --student-id A25001234 --subject-id <uuid> --value 90
//!   sicei report dashboard
//!
//! Records live in a JSON data file that is rewritten after every change.

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use cli::commands::Cli;
use cli::context::AppContext;
use cli::output::ErrorDetail;
use shared::AppConfig;
use tracing::debug;

fn run(cli: &Cli) -> anyhow::Result<serde_json::Value> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());

    let context = AppContext::open(config, &data_file)?;
    let outcome = cli.command.run(&context)?;
    if outcome.changed {
        context.save()?;
    }
    Ok(outcome.body)
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let detail = ErrorDetail::from_error(&err);
            debug!(kind = %detail.kind, "{}", detail.message);
            eprintln!("{}", serde_json::to_string_pretty(&detail)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
