//! # Boolean-Like Column Detection
//!
//! A column is treated as an audit component when enough of its rows map
//! to yes/no under [`crate::boolean::map_value`]. The ratio is taken over
//! *all* rows, including missing ones, so a sparsely filled column needs
//! at least `threshold` of the table to carry a recognisable answer.
//!
//! ```text
//! boolean_like  ⇔  mapped > 0  ∧  mapped / n_rows ≥ threshold
//! ```

use serde::{Deserialize, Serialize};

use crate::boolean::map_column;
use crate::dataset::Dataset;
use crate::error::{CoreError, CoreResult};

/// Minimum fraction of rows that must map for a column to be boolean-like.
///
/// Always within `(0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DetectionThreshold(f64);

impl DetectionThreshold {
    /// Half the rows must map.
    pub const DEFAULT: DetectionThreshold = DetectionThreshold(0.5);

    pub fn new(value: f64) -> CoreResult<Self> {
        if value.is_nan() || value <= 0.0 || value > 1.0 {
            return Err(CoreError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for DetectionThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for DetectionThreshold {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DetectionThreshold> for f64 {
    fn from(t: DetectionThreshold) -> Self {
        t.0
    }
}

/// Per-column detection diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Rows that mapped to either yes or no.
    pub mapped: usize,
    pub true_count: usize,
    pub false_count: usize,
    /// Rows that did not map (missing or outside the dictionary).
    pub unmapped: usize,
    /// `mapped / n_rows`, or 0.0 for an empty table.
    pub ratio: f64,
    pub boolean_like: bool,
}

/// Profile every column of the dataset, in column order.
pub fn profile_columns(dataset: &Dataset, threshold: DetectionThreshold) -> Vec<ColumnProfile> {
    let n_rows = dataset.n_rows();

    dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mapped_values = map_column(dataset, index);
            let true_count = mapped_values.iter().filter(|v| **v == Some(true)).count();
            let false_count = mapped_values.iter().filter(|v| **v == Some(false)).count();
            let mapped = true_count + false_count;
            let ratio = if n_rows == 0 {
                0.0
            } else {
                mapped as f64 / n_rows as f64
            };
            let boolean_like = mapped > 0 && ratio >= threshold.value();

            tracing::debug!(
                column = %name,
                mapped,
                n_rows,
                ratio,
                boolean_like,
                "profiled column"
            );

            ColumnProfile {
                name: name.clone(),
                mapped,
                true_count,
                false_count,
                unmapped: n_rows - mapped,
                ratio,
                boolean_like,
            }
        })
        .collect()
}

/// Names of the boolean-like columns, in column order.
pub fn find_boolean_columns(dataset: &Dataset, threshold: DetectionThreshold) -> Vec<String> {
    profile_columns(dataset, threshold)
        .into_iter()
        .filter(|p| p.boolean_like)
        .map(|p| p.name)
        .collect()
}
