//! # auditai CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use auditai_cli::analyze::{run_analyze, AnalyzeArgs};
use auditai_cli::components::{run_components, ComponentsArgs};
use auditai_cli::report::{run_report, ReportArgs};
use auditai_cli::settings::load_config;

/// AuditAI: clinical audit compliance from CSV and Excel data.
///
/// Detects yes/no compliance columns, computes per-component and overall
/// compliance against a target, and exports a PDF summary.
#[derive(Parser, Debug)]
#[command(name = "auditai", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to ./auditai.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Preview a dataset and summarise its compliance.
    Analyze(AnalyzeArgs),

    /// Export a PDF compliance report.
    Report(ReportArgs),

    /// Show the boolean-like detection profile of every column.
    Components(ComponentsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "auditai starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args, &config, &cwd),
        Commands::Report(args) => run_report(&args, &config, &cwd),
        Commands::Components(args) => run_components(&args, &config, &cwd),
    }
}
