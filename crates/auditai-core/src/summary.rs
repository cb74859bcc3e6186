//! # Audit Summary
//!
//! Runs the full pipeline over a dataset and collects everything the
//! outputs need: shape, detected components, component and overall
//! compliance, and recommendations.

use serde::Serialize;

use crate::compliance::{
    compute_component_compliance, compute_overall, ComponentCompliance, OverallCompliance,
};
use crate::config::AuditConfig;
use crate::dataset::Dataset;
use crate::detect::find_boolean_columns;
use crate::error::{CoreError, CoreResult};
use crate::recommend::recommendations;

/// Result of auditing one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSummary {
    /// Display name of the input (usually the file name).
    pub source: String,
    pub n_records: usize,
    pub n_columns: usize,
    /// Detected boolean-like columns, in column order.
    pub components: Vec<String>,
    pub component_compliance: Vec<ComponentCompliance>,
    pub overall: OverallCompliance,
    pub target: f64,
    pub recommendations: Vec<String>,
}

/// One labelled figure for the report's metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    /// Fraction in `[0, 1]`, or `None` when undefined.
    pub value: Option<f64>,
}

impl AuditSummary {
    /// Report aggregate: `overall` first, then every component in order.
    ///
    /// A component that happens to be named `overall` keeps its own row.
    pub fn metrics(&self) -> Vec<Metric> {
        std::iter::once(Metric {
            label: "overall".to_string(),
            value: Some(self.overall.fraction),
        })
        .chain(self.component_compliance.iter().map(|c| Metric {
            label: c.component.clone(),
            value: c.compliance,
        }))
        .collect()
    }

    /// Whether overall compliance meets the target.
    pub fn meets_target(&self) -> bool {
        self.overall.fraction >= self.target
    }
}

/// Audit a dataset.
///
/// Fails with [`CoreError::NoBooleanColumns`] when nothing in the dataset
/// looks like a yes/no indicator.
pub fn audit(dataset: &Dataset, source: &str, config: &AuditConfig) -> CoreResult<AuditSummary> {
    config.validate()?;

    let components = find_boolean_columns(dataset, config.detection_threshold);
    if components.is_empty() {
        tracing::warn!(source, columns = dataset.n_columns(), "no boolean-like columns");
        return Err(CoreError::NoBooleanColumns);
    }
    tracing::info!(
        source,
        rows = dataset.n_rows(),
        components = components.len(),
        "detected components"
    );

    let component_compliance = compute_component_compliance(dataset, &components)?;
    let overall = compute_overall(dataset, &components)?;
    let recommendations = recommendations(overall.fraction, config.target);

    tracing::info!(
        overall = overall.fraction,
        method = %overall.method,
        target = config.target,
        "computed overall compliance"
    );

    Ok(AuditSummary {
        source: source.to_string(),
        n_records: dataset.n_rows(),
        n_columns: dataset.n_columns(),
        components,
        component_compliance,
        overall,
        target: config.target,
        recommendations,
    })
}
