//! # Ingest Error Types

use std::path::PathBuf;

use thiserror::Error;

use auditai_core::CoreError;

/// Result alias for loader operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors from loading a dataset file.
#[derive(Error, Debug)]
pub enum IngestError {
    /// File extension is not a supported tabular format.
    #[error("unsupported file type '{extension}' for {path}: expected .csv, .xlsx, .xlsm, .xls or .ods")]
    UnsupportedFormat {
        path: PathBuf,
        extension: String,
    },

    /// The input has no header row.
    #[error("no header row found in {0}")]
    Empty(String),

    /// A CSV line carries more fields than the header.
    #[error("expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        /// One-based line number in the source file.
        line: u64,
        expected: usize,
        found: usize,
    },

    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook open/read error.
    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Dataset construction rejected the table.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
