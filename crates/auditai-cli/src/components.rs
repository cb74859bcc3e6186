//! # Components Subcommand
//!
//! Shows how every column fared in boolean-like detection: how many values
//! mapped to yes/no and whether the column cleared the threshold.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use auditai_core::{profile_columns, AuditConfig, DetectionThreshold};

use crate::output::{render_json, render_profiles, OutputFormat};
use crate::settings::resolve;
use crate::{load_input, EXIT_NO_COMPONENTS, EXIT_OK};

/// Arguments for the `auditai components` subcommand.
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// CSV or Excel file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Minimum fraction of mapped values for a column to count as a component.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the components subcommand.
///
/// Returns exit code: 0 when at least one column is boolean-like, 2 otherwise.
pub fn run_components(args: &ComponentsArgs, config: &AuditConfig, cwd: &Path) -> Result<u8> {
    let threshold = match args.threshold {
        Some(value) => DetectionThreshold::new(value).context("invalid --threshold")?,
        None => config.detection_threshold,
    };
    let path = resolve(&args.file, cwd);
    let dataset = load_input(&path)?;

    let profiles = profile_columns(&dataset, threshold);
    match args.format {
        OutputFormat::Text => print!("{}", render_profiles(&profiles)),
        OutputFormat::Json => println!("{}", render_json(&profiles)?),
    }

    if profiles.iter().any(|p| p.boolean_like) {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_NO_COMPONENTS)
    }
}
