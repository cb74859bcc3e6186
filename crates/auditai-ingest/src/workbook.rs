//! # Excel Loader
//!
//! Reads the first worksheet of an `.xlsx`/`.xlsm`/`.xls`/`.ods` workbook.
//! The first row of the used range is the header.
//!
//! Cell rendering keeps yes/no detection stable across number formats:
//! a `1` stored as the float `1.0` renders as `"1"`, not `"1.0"`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use auditai_core::{unique_headers, Cell, Dataset};

use crate::error::{IngestError, IngestResult};

/// Integral floats beyond this magnitude keep their float rendering.
const MAX_INTEGRAL_FLOAT: f64 = 1e15;

/// Rendering of date and datetime cells.
const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Read the first worksheet of a workbook into a dataset.
pub fn read_excel(path: &Path) -> IngestResult<Dataset> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(IngestError::Empty(path.display().to_string())),
    };

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| IngestError::Empty(path.display().to_string()))?;

    let raw_header: Vec<String> = header
        .iter()
        .map(|cell| render_cell(cell).unwrap_or_default())
        .collect();
    let columns = unique_headers(&raw_header);

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(render_cell).collect())
        .collect();

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "parsed worksheet"
    );
    Ok(Dataset::new(columns, rows)?)
}

/// Render a worksheet cell as text; empty and error cells are missing.
pub fn render_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(render_float(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.format(ISO_DATETIME).to_string())
                .unwrap_or_else(|| render_float(dt.as_f64())),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_INTEGRAL_FLOAT {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
