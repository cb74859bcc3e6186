//! # In-Memory Tabular Model
//!
//! A [`Dataset`] is a header row plus rectangular data rows of [`Cell`]s.
//! Loaders render every value to text; a missing value (empty CSV field,
//! empty spreadsheet cell) is `None` so that downstream mapping can tell
//! "absent" apart from "present but blank".

use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, CoreResult};

/// A single table value. `None` is a missing value.
pub type Cell = Option<String>;

/// A rectangular table with named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> CoreResult<Self> {
        let expected = columns.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(CoreError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        Ok(Self { columns, rows })
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of one column by index.
    ///
    /// The caller guarantees `index < n_columns()`; every row holds that
    /// many cells by construction.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Iterate the cells of a named column.
    pub fn column(&self, name: &str) -> CoreResult<impl Iterator<Item = &Cell> + '_> {
        let index = self
            .column_index(name)
            .ok_or_else(|| CoreError::UnknownColumn(name.to_string()))?;
        Ok(self.column_cells(index))
    }

    /// The first `n` rows, for previews.
    pub fn head(&self, n: usize) -> Dataset {
        Dataset {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// Normalise a raw header row.
///
/// Blank headers become `Unnamed: <i>` (zero-based position). Other names
/// are kept verbatim, surrounding whitespace included. Repeated names
/// get `.1`, `.2`, ... suffixes; the first occurrence keeps its name and a
/// generated suffix never collides with a header already in use.
pub fn unique_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());

    for (i, name) in raw.iter().enumerate() {
        let name = name.as_ref();
        let base = if name.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        if used.contains(&candidate) {
            let counter = seen.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                candidate = format!("{base}.{counter}");
                if !used.contains(&candidate) {
                    break;
                }
            }
        }
        seen.entry(base).or_insert(0);
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
