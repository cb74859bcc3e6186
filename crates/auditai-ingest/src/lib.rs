//! # auditai-ingest — Dataset Loaders
//!
//! Loads audit spreadsheets into [`auditai_core::Dataset`]. The format is
//! chosen from the file extension:
//!
//! | extension                        | loader                    |
//! |----------------------------------|---------------------------|
//! | `.csv`                           | [`delimited::read_csv`]   |
//! | `.xlsx`, `.xlsm`, `.xls`, `.ods` | [`workbook::read_excel`]  |
//!
//! Every value is rendered to text; interpretation (yes/no mapping,
//! detection) happens in `auditai-core`.

pub mod delimited;
pub mod error;
pub mod workbook;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use auditai_core::Dataset;

pub use delimited::read_csv;
pub use error::{IngestError, IngestResult};
pub use workbook::read_excel;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Excel,
}

impl DatasetFormat {
    /// Pick a format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> IngestResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Excel),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Load a dataset from a CSV or Excel file.
pub fn load_dataset(path: &Path) -> IngestResult<Dataset> {
    let format = DatasetFormat::from_path(path)?;
    tracing::info!(path = %path.display(), ?format, "loading dataset");

    let dataset = match format {
        DatasetFormat::Csv => read_csv(BufReader::new(File::open(path)?))?,
        DatasetFormat::Excel => read_excel(path)?,
    };

    let (rows, columns) = dataset.shape();
    tracing::info!(rows, columns, "dataset loaded");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("a.csv")).unwrap(),
            DatasetFormat::Csv
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("A.CSV")).unwrap(),
            DatasetFormat::Csv
        );
        for name in ["a.xlsx", "a.XLSM", "a.xls", "a.ods"] {
            assert_eq!(
                DatasetFormat::from_path(Path::new(name)).unwrap(),
                DatasetFormat::Excel,
                "{name}"
            );
        }
    }

    #[test]
    fn unsupported_extensions_error() {
        for name in ["a.json", "a.txt", "noext"] {
            assert!(matches!(
                DatasetFormat::from_path(Path::new(name)),
                Err(IngestError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn load_dataset_reads_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.csv");
        std::fs::write(&path, "compliant\nyes\nno\n").unwrap();

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.shape(), (2, 1));
    }

    #[test]
    fn load_dataset_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
