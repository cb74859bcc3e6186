//! # Report Error Types

use thiserror::Error;

/// Errors from report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Creating the output directory or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF backend rejected an operation.
    #[error("PDF error: {0}")]
    Pdf(String),
}
