//! # Audit Configuration
//!
//! YAML-backed settings shared by the CLI and the report writer. Every field
//! is optional in the file; omitted fields take the defaults below.
//!
//! ```yaml
//! target: 0.95
//! detection_threshold: 0.5
//! preview_rows: 20
//! report:
//!   title: "Audit Report — Compliance Summary"
//!   output: reports/audit_report.pdf
//!   author_name: Dr A. Example
//!   author_grade: ST4
//!   logo: assets/nhs_logo.png
//!   assets_dirs: [assets]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detect::DetectionThreshold;
use crate::error::{CoreError, CoreResult};
use crate::recommend::DEFAULT_TARGET;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Compliance target as a fraction in `(0, 1]`.
    pub target: f64,
    /// Detection threshold for boolean-like columns.
    pub detection_threshold: DetectionThreshold,
    /// Rows shown in the data preview.
    pub preview_rows: usize,
    pub report: ReportDefaults,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            detection_threshold: DetectionThreshold::DEFAULT,
            preview_rows: 20,
            report: ReportDefaults::default(),
        }
    }
}

/// Defaults for PDF export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportDefaults {
    pub title: String,
    /// Output PDF path.
    pub output: PathBuf,
    pub author_name: String,
    pub author_grade: String,
    /// Explicit logo file. When unset the report writer searches `assets_dirs`.
    pub logo: Option<PathBuf>,
    /// Directories searched for a logo image.
    pub assets_dirs: Vec<PathBuf>,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            title: "Audit Report — Compliance Summary".to_string(),
            output: PathBuf::from("reports").join("audit_report.pdf"),
            author_name: String::new(),
            author_grade: String::new(),
            logo: None,
            assets_dirs: vec![PathBuf::from("assets")],
        }
    }
}

impl AuditConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> CoreResult<Self> {
        Self::parse(yaml, Path::new("<inline>"))
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, path)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn parse(yaml: &str, path: &Path) -> CoreResult<Self> {
        // An empty file is a valid, all-defaults configuration.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| CoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> CoreResult<()> {
        if self.target.is_nan() || self.target <= 0.0 || self.target > 1.0 {
            return Err(CoreError::InvalidTarget(self.target));
        }
        DetectionThreshold::new(self.detection_threshold.value())?;
        Ok(())
    }
}
