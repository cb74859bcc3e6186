//! # Analyze Subcommand
//!
//! Loads a dataset, previews it, detects boolean-like components, and prints
//! component and overall compliance with recommendations.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use auditai_core::AuditConfig;

use crate::output::{render_json, render_preview, render_shape, render_summary, OutputFormat};
use crate::settings::{apply_audit_overrides, resolve};
use crate::{audit_or_report_missing, load_input, source_name, EXIT_NO_COMPONENTS, EXIT_OK};

/// Arguments for the `auditai analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV or Excel file to audit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of rows to preview (0 disables the preview).
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Compliance target as a fraction, e.g. 0.95.
    #[arg(long)]
    pub target: Option<f64>,

    /// Minimum fraction of mapped values for a column to count as a component.
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Execute the analyze subcommand.
///
/// Returns exit code: 0 on success, 2 when no components were detected.
pub fn run_analyze(args: &AnalyzeArgs, config: &AuditConfig, cwd: &Path) -> Result<u8> {
    let config = apply_audit_overrides(config.clone(), args.target, args.threshold)?;
    let path = resolve(&args.file, cwd);
    let dataset = load_input(&path)?;
    let source = source_name(&path);

    if args.format == OutputFormat::Text {
        let rows = args.preview.unwrap_or(config.preview_rows);
        if rows > 0 {
            println!("Data preview");
            print!("{}", render_preview(&dataset.head(rows)));
        }
        println!("{}", render_shape(&dataset));
        println!();
    }

    let Some(summary) = audit_or_report_missing(&dataset, &source, &config)? else {
        return Ok(EXIT_NO_COMPONENTS);
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_summary(&summary)),
        OutputFormat::Json => println!("{}", render_json(&summary)?),
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            file: PathBuf::from(file),
            format: OutputFormat::Text,
            preview: None,
            target: None,
            threshold: None,
        }
    }

    #[test]
    fn analyze_succeeds_on_boolean_csv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("audit.csv"),
            "ward,consent,documented\nA,yes,yes\nB,no,yes\n",
        )
        .unwrap();

        let code = run_analyze(&args("audit.csv"), &AuditConfig::default(), dir.path()).unwrap();
        assert_eq!(code, EXIT_OK);
    }

    #[test]
    fn analyze_json_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("audit.csv"), "compliant\nyes\nno\n").unwrap();

        let mut a = args("audit.csv");
        a.format = OutputFormat::Json;
        a.preview = Some(0);
        let code = run_analyze(&a, &AuditConfig::default(), dir.path()).unwrap();
        assert_eq!(code, EXIT_OK);
    }

    #[test]
    fn analyze_without_components_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scores.csv"), "ward,score\nA,7\nB,9\n").unwrap();

        let code = run_analyze(&args("scores.csv"), &AuditConfig::default(), dir.path()).unwrap();
        assert_eq!(code, EXIT_NO_COMPONENTS);
    }

    #[test]
    fn analyze_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_analyze(&args("missing.csv"), &AuditConfig::default(), dir.path()).is_err());
    }

    #[test]
    fn analyze_rejects_invalid_threshold() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("audit.csv"), "compliant\nyes\n").unwrap();

        let mut a = args("audit.csv");
        a.threshold = Some(1.5);
        assert!(run_analyze(&a, &AuditConfig::default(), dir.path()).is_err());
    }

    #[test]
    fn raised_threshold_can_drop_all_components() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("sparse.csv"),
            "consent\nyes\nmaybe\nunknown\nno\n",
        )
        .unwrap();

        let mut a = args("sparse.csv");
        assert_eq!(
            run_analyze(&a, &AuditConfig::default(), dir.path()).unwrap(),
            EXIT_OK
        );
        a.threshold = Some(0.75);
        assert_eq!(
            run_analyze(&a, &AuditConfig::default(), dir.path()).unwrap(),
            EXIT_NO_COMPONENTS
        );
    }
}
