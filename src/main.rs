//! fixed-deps - CI check for unfixed package.json dependencies
//!
//! Reads package.json, reports every dependency whose version is not an exact
//! release, writes an HTML report and posts the result to GitHub.

use clap::Parser;
use fixed_deps::cli::CliArgs;
use fixed_deps::context::{GitHubContext, RuntimeContext, GITHUB_CONTEXT_VAR};
use fixed_deps::delivery::{Delivery, DryRunDelivery, GitHubDelivery};
use fixed_deps::orchestrator::Orchestrator;
use fixed_deps::output::{write_json, TextFormatter, Verbosity};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbosity());

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked from the flags
fn init_tracing(verbosity: Verbosity) {
    let level = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fixed_deps={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        path = %args.path.display(),
        dry_run = args.dry_run,
        "starting"
    );

    let runtime = if args.dry_run {
        None
    } else {
        Some(RuntimeContext::from_env()?)
    };

    let context_repository = match &runtime {
        Some(runtime) => Some(runtime.github.repository.clone()),
        None if args.needs_repository() => repository_from_env()?,
        None => None,
    };

    let settings = args.run_settings(context_repository.as_deref())?;
    let options = settings.options;

    let delivery: Box<dyn Delivery> = match &runtime {
        Some(runtime) => Box::new(GitHubDelivery::from_runtime(runtime)?),
        None => Box::new(DryRunDelivery),
    };

    let outcome = Orchestrator::new(settings, delivery).run().await?;

    let mut stdout = io::stdout().lock();
    if args.json {
        write_json(
            &outcome.verdict,
            &options,
            Some(&outcome.report_path),
            &mut stdout,
        )?;
    } else {
        let formatter = TextFormatter::with_color(args.verbosity(), io::stdout().is_terminal());
        formatter.format(
            &outcome.verdict,
            &options,
            Some(&outcome.report_path),
            &mut stdout,
        )?;
    }
    stdout.flush()?;

    if outcome.is_okay() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Repository name for dry runs, read from the workflow context when it is present
fn repository_from_env() -> anyhow::Result<Option<String>> {
    match std::env::var(GITHUB_CONTEXT_VAR) {
        Ok(json) if !json.trim().is_empty() => {
            Ok(Some(GitHubContext::from_json(&json)?.repository))
        }
        _ => Ok(None),
    }
}
