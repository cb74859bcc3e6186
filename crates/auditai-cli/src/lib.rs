//! # auditai-cli — Command-Line Front End
//!
//! Provides the `auditai` command-line interface over the audit pipeline.
//!
//! ## Subcommands
//!
//! - `auditai analyze`: Preview a dataset, detect components, and print
//!   component and overall compliance with recommendations.
//! - `auditai report`: Run the same audit and export a PDF summary.
//! - `auditai components`: Show how each column fared in detection.
//!
//! ```bash
//! auditai analyze data/hand_hygiene.csv
//! auditai analyze data/hand_hygiene.xlsx --format json
//! auditai report data/hand_hygiene.csv --author "Dr A. Example" --grade ST4
//! auditai components data/hand_hygiene.csv --threshold 0.75
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: success.
//! - `1`: runtime error (unreadable file, invalid configuration, ...).
//! - `2`: no boolean-like columns were found.

pub mod analyze;
pub mod components;
pub mod output;
pub mod report;
pub mod settings;

use std::path::Path;

use anyhow::{Context, Result};

use auditai_core::{audit, AuditConfig, AuditSummary, CoreError, Dataset};

/// Successful run.
pub const EXIT_OK: u8 = 0;

/// Detection found nothing to audit.
pub const EXIT_NO_COMPONENTS: u8 = 2;

/// Load a dataset, attaching the path to any error.
pub fn load_input(path: &Path) -> Result<Dataset> {
    auditai_ingest::load_dataset(path)
        .with_context(|| format!("failed to load dataset: {}", path.display()))
}

/// Display name for an input file: its file name, or the full path.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the audit. `Ok(None)` means no components were detected; the
/// message has already been logged at error level.
pub fn audit_or_report_missing(
    dataset: &Dataset,
    source: &str,
    config: &AuditConfig,
) -> Result<Option<AuditSummary>> {
    match audit(dataset, source, config) {
        Ok(summary) => Ok(Some(summary)),
        Err(CoreError::NoBooleanColumns) => {
            tracing::error!("{}", CoreError::NoBooleanColumns);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to audit {source}")),
    }
}
