//! # CSV Loader
//!
//! The first record is the header. Fields are decoded as UTF-8 with lossy
//! replacement so exports from legacy spreadsheet tools still load. An empty
//! field is a missing value; a short row is padded with missing values; a
//! row wider than the header is rejected.

use std::io::Read;

use auditai_core::{unique_headers, Cell, Dataset};

use crate::error::{IngestError, IngestResult};

const UTF8_BOM: char = '\u{feff}';

/// Read a CSV stream into a dataset.
pub fn read_csv<R: Read>(reader: R) -> IngestResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.byte_records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(IngestError::Empty("CSV input".to_string())),
    };
    let raw_header: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let text = String::from_utf8_lossy(field);
            if i == 0 {
                text.trim_start_matches(UTF8_BOM).to_string()
            } else {
                text.into_owned()
            }
        })
        .collect();
    let columns = unique_headers(&raw_header);
    let width = columns.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.len() > width {
            return Err(IngestError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: width,
                found: record.len(),
            });
        }
        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(String::from_utf8_lossy(field).into_owned())
                }
            })
            .collect();
        row.resize(width, None);
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = width, "parsed CSV");
    Ok(Dataset::new(columns, rows)?)
}
