//! # auditai-core — Audit Logic for Yes/No Compliance Datasets
//!
//! This crate holds everything AuditAI knows about clinical-audit data that
//! does not depend on a file format or an output medium. Loaders
//! (`auditai-ingest`) produce a [`Dataset`]; the report writer
//! (`auditai-report`) consumes an [`AuditSummary`].
//!
//! ## Pipeline
//!
//! ```text
//! Dataset ──► detect::find_boolean_columns ──► components
//!    │                                            │
//!    └────► compliance::compute_component_compliance / compute_overall
//!                                                 │
//!                          recommend::recommendations ──► AuditSummary
//! ```
//!
//! ## Crate Policy
//!
//! - No dependencies on other `auditai-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod boolean;
pub mod compliance;
pub mod config;
pub mod dataset;
pub mod detect;
pub mod error;
pub mod recommend;
pub mod summary;

// Re-export primary types for ergonomic imports.
pub use boolean::{map_cell, map_column, map_value, FALSE_VALUES, TRUE_VALUES};
pub use compliance::{
    compute_component_compliance, compute_overall, format_percent, ComponentCompliance,
    OverallCompliance, OverallMethod,
};
pub use config::{AuditConfig, ReportDefaults};
pub use dataset::{unique_headers, Cell, Dataset};
pub use detect::{find_boolean_columns, profile_columns, ColumnProfile, DetectionThreshold};
pub use error::{CoreError, CoreResult};
pub use recommend::{recommendations, DEFAULT_TARGET};
pub use summary::{audit, AuditSummary, Metric};
