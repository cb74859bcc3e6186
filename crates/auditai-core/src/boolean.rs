//! # Yes/No Mapping
//!
//! Maps free-text audit answers to booleans using a fixed dictionary.
//! Values are trimmed and lowercased before lookup; anything outside the
//! dictionary is unmapped (`None`) rather than an error, since audit
//! spreadsheets routinely carry "N/A", "unknown" or free-text notes.

use crate::dataset::{Cell, Dataset};

/// Values that map to `true` (after trim + lowercase).
pub const TRUE_VALUES: [&str; 5] = ["yes", "true", "1", "y", "t"];

/// Values that map to `false` (after trim + lowercase). The empty string
/// covers present-but-blank answers.
pub const FALSE_VALUES: [&str; 6] = ["no", "false", "0", "n", "f", ""];

/// Map a single textual value.
pub fn map_value(raw: &str) -> Option<bool> {
    let normalized = raw.trim().to_lowercase();
    if TRUE_VALUES.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSE_VALUES.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Map a cell. Missing cells are unmapped.
pub fn map_cell(cell: &Cell) -> Option<bool> {
    cell.as_deref().and_then(map_value)
}

/// Map every cell of the column at `index`.
pub fn map_column(dataset: &Dataset, index: usize) -> Vec<Option<bool>> {
    dataset.column_cells(index).map(map_cell).collect()
}
