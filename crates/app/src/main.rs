//! Apiprobe - Main Entry Point
//!
//! Resolves the base URL, runs the contact API suite and exits with 0 when
//! every executed test passed, 1 when any failed and 2 on setup errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use apiprobe_application::{TestRunner, run_contact_suite};
use apiprobe_infrastructure::{EnvFile, ProbeConfig, ReqwestHttpClient, RunReport};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "apiprobe")]
#[command(about = "Smoke-test a web service's HTTP API and report pass/fail", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the service under test
    #[arg(long, env = "APIPROBE_BASE_URL")]
    base_url: Option<String>,

    /// Dotenv file to read REACT_APP_BACKEND_URL from [default: frontend/.env]
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Write a JSON report of every result to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<bool> {
    let env_file = EnvFile::from_arg(cli.env_file);
    let config = ProbeConfig::resolve(cli.base_url.as_deref(), &env_file)?;
    let client = ReqwestHttpClient::new().context("failed to create HTTP client")?;

    let started_at = Utc::now();
    let mut runner = TestRunner::new(config.base_url, Arc::new(client));
    let all_passed = run_contact_suite(&mut runner).await;

    if let Some(path) = &cli.report {
        RunReport::from_runner(&runner, started_at)
            .write_to(path)
            .await
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(all_passed)
}
