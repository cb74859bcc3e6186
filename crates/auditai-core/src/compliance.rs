//! # Compliance Aggregation
//!
//! Turns detected components into compliance fractions.
//!
//! ## Component compliance
//!
//! For each component, compliance is the share of *mapped* rows answering
//! yes. Unmapped rows are excluded from the denominator; a component with
//! no mapped rows has no defined compliance (`None`, shown as `N/A`).
//!
//! ## Overall compliance
//!
//! Resolved in this order:
//!
//! 1. **Explicit column.** A component whose lowercase name is `compliant`
//!    is the authoritative per-row outcome. Its mapped-row compliance is
//!    the overall figure. When several components qualify, the last one in
//!    column order wins.
//! 2. **No components.** Overall is 0.0 and no row passes.
//! 3. **All components.** A row passes when every component is yes, with
//!    unmapped answers treated as yes (N/A does not penalise a row). The
//!    figure is passing rows over *all* rows.

use std::fmt;

use serde::Serialize;

use crate::boolean::map_column;
use crate::dataset::Dataset;
use crate::error::{CoreError, CoreResult};

/// Name (case-insensitive) of the column that carries the overall outcome.
pub const EXPLICIT_COMPLIANT_COLUMN: &str = "compliant";

// ---------------------------------------------------------------------------
// Component compliance
// ---------------------------------------------------------------------------

/// Compliance of a single component column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCompliance {
    pub component: String,
    /// Rows that mapped to yes or no.
    pub valid: usize,
    /// Rows that mapped to yes.
    pub compliant: usize,
    /// `compliant / valid`, or `None` when no row mapped.
    pub compliance: Option<f64>,
}

impl ComponentCompliance {
    /// Compliance as a percentage, if defined.
    pub fn percent(&self) -> Option<f64> {
        self.compliance.map(as_percent)
    }
}

/// Compute compliance for each named column, preserving the given order.
pub fn compute_component_compliance<S: AsRef<str>>(
    dataset: &Dataset,
    columns: &[S],
) -> CoreResult<Vec<ComponentCompliance>> {
    columns
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let index = dataset
                .column_index(name)
                .ok_or_else(|| CoreError::UnknownColumn(name.to_string()))?;
            let mapped = map_column(dataset, index);
            let valid = mapped.iter().filter(|v| v.is_some()).count();
            let compliant = mapped.iter().filter(|v| **v == Some(true)).count();
            let compliance = if valid == 0 {
                None
            } else {
                Some(compliant as f64 / valid as f64)
            };
            Ok(ComponentCompliance {
                component: name.to_string(),
                valid,
                compliant,
                compliance,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Overall compliance
// ---------------------------------------------------------------------------

/// How the overall figure was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "column", rename_all = "snake_case")]
pub enum OverallMethod {
    /// Taken from an explicit `compliant` column.
    ExplicitColumn(String),
    /// Rows pass when every component is yes (or unmapped).
    AllComponents,
    /// Nothing to aggregate.
    NoComponents,
}

impl fmt::Display for OverallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitColumn(name) => write!(f, "explicit column '{name}'"),
            Self::AllComponents => write!(f, "all components yes (N/A not penalised)"),
            Self::NoComponents => write!(f, "no components"),
        }
    }
}

/// Overall compliance and the per-row pass mask it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallCompliance {
    /// Fraction in `[0, 1]`.
    pub fraction: f64,
    pub method: OverallMethod,
    /// One entry per dataset row: whether that row counts as compliant.
    #[serde(skip)]
    pub row_mask: Vec<bool>,
}

impl OverallCompliance {
    /// Number of rows flagged compliant in the mask.
    pub fn passing_rows(&self) -> usize {
        self.row_mask.iter().filter(|v| **v).count()
    }
}

/// Compute overall compliance from the detected components.
pub fn compute_overall<S: AsRef<str>>(
    dataset: &Dataset,
    bool_columns: &[S],
) -> CoreResult<OverallCompliance> {
    let n_rows = dataset.n_rows();

    let explicit = bool_columns
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| c.to_lowercase() == EXPLICIT_COMPLIANT_COLUMN)
        .last();

    if let Some(column) = explicit {
        let index = dataset
            .column_index(column)
            .ok_or_else(|| CoreError::UnknownColumn(column.to_string()))?;
        let mapped = map_column(dataset, index);
        let valid = mapped.iter().filter(|v| v.is_some()).count();
        let row_mask: Vec<bool> = mapped.iter().map(|v| *v == Some(true)).collect();
        let passing = row_mask.iter().filter(|v| **v).count();
        let fraction = if valid == 0 {
            0.0
        } else {
            passing as f64 / valid as f64
        };
        tracing::debug!(column, valid, passing, "overall from explicit column");
        return Ok(OverallCompliance {
            fraction,
            method: OverallMethod::ExplicitColumn(column.to_string()),
            row_mask,
        });
    }

    if bool_columns.is_empty() {
        return Ok(OverallCompliance {
            fraction: 0.0,
            method: OverallMethod::NoComponents,
            row_mask: vec![false; n_rows],
        });
    }

    let mut row_mask = vec![true; n_rows];
    for column in bool_columns {
        let column = column.as_ref();
        let index = dataset
            .column_index(column)
            .ok_or_else(|| CoreError::UnknownColumn(column.to_string()))?;
        for (pass, value) in row_mask.iter_mut().zip(map_column(dataset, index)) {
            // Unmapped counts as yes.
            *pass &= value.unwrap_or(true);
        }
    }

    let passing = row_mask.iter().filter(|v| **v).count();
    let fraction = if n_rows == 0 {
        0.0
    } else {
        passing as f64 / n_rows as f64
    };
    tracing::debug!(
        components = bool_columns.len(),
        passing,
        n_rows,
        "overall from all components"
    );

    Ok(OverallCompliance {
        fraction,
        method: OverallMethod::AllComponents,
        row_mask,
    })
}

// ---------------------------------------------------------------------------
// Percent formatting
// ---------------------------------------------------------------------------

/// Convert a fraction to a percentage.
pub fn as_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Render a fraction as a one-decimal percentage, or `N/A`.
pub fn format_percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) if f.is_finite() => format!("{:.1}%", as_percent(f)),
        _ => "N/A".to_string(),
    }
}
