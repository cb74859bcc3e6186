//! # Core Error Types
//!
//! Structured errors for dataset construction, detection, aggregation and
//! configuration in `auditai-core`.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from core audit operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A data row does not have one cell per header column.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based data row index (header excluded).
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of cells found in the row.
        found: usize,
    },

    /// A column name was requested that the dataset does not contain.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Detection found nothing to audit.
    #[error(
        "Couldn't find any boolean-like columns (Yes/No, True/False, 1/0). Add one like 'compliant'."
    )]
    NoBooleanColumns,

    /// Detection threshold outside `(0, 1]`.
    #[error("invalid detection threshold {0}: must be in (0, 1]")]
    InvalidThreshold(f64),

    /// Compliance target outside `(0, 1]`.
    #[error("invalid compliance target {0}: must be in (0, 1]")]
    InvalidTarget(f64),

    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {message}")]
    Config {
        /// Path of the offending file (`<inline>` for in-memory YAML).
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
