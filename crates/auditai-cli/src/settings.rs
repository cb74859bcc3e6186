//! # Settings Resolution
//!
//! Layers configuration: command-line flags over the config file over
//! built-in defaults. The config file is `--config <FILE>` when given,
//! otherwise `auditai.yaml` in the working directory if present.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use auditai_core::{AuditConfig, DetectionThreshold};

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "auditai.yaml";

/// Load configuration from an explicit path, the default file, or defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AuditConfig> {
    if let Some(path) = explicit {
        let path = resolve(path, cwd);
        return AuditConfig::load(&path)
            .with_context(|| format!("failed to load config: {}", path.display()));
    }

    let implicit = cwd.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        tracing::debug!(path = %implicit.display(), "using config from working directory");
        return AuditConfig::load(&implicit)
            .with_context(|| format!("failed to load config: {}", implicit.display()));
    }

    tracing::debug!("no config file; using defaults");
    Ok(AuditConfig::default())
}

/// Apply audit-level flag overrides and re-validate.
pub fn apply_audit_overrides(
    mut config: AuditConfig,
    target: Option<f64>,
    threshold: Option<f64>,
) -> Result<AuditConfig> {
    if let Some(target) = target {
        config.target = target;
    }
    if let Some(threshold) = threshold {
        config.detection_threshold =
            DetectionThreshold::new(threshold).context("invalid --threshold")?;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

/// Resolve a relative path against `cwd`.
pub fn resolve(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_config_anywhere() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(None, dir.path()).unwrap();
        assert_eq!(cfg, AuditConfig::default());
    }

    #[test]
    fn implicit_config_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "preview_rows: 3\n").unwrap();
        let cfg = load_config(None, dir.path()).unwrap();
        assert_eq!(cfg.preview_rows, 3);
    }

    #[test]
    fn explicit_relative_config_resolves_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("conf")).unwrap();
        std::fs::write(dir.path().join("conf/audit.yaml"), "target: 0.8\n").unwrap();

        let cfg = load_config(Some(Path::new("conf/audit.yaml")), dir.path()).unwrap();
        assert_eq!(cfg.target, 0.8);
    }

    #[test]
    fn explicit_missing_config_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(Path::new("nope.yaml")), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("nope.yaml"));
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg = apply_audit_overrides(AuditConfig::default(), Some(0.9), Some(0.6)).unwrap();
        assert_eq!(cfg.target, 0.9);
        assert_eq!(cfg.detection_threshold.value(), 0.6);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert!(apply_audit_overrides(AuditConfig::default(), Some(1.2), None).is_err());
        assert!(apply_audit_overrides(AuditConfig::default(), None, Some(0.0)).is_err());
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(Path::new("/abs/x"), cwd), Path::new("/abs/x"));
        assert_eq!(resolve(Path::new("rel/x"), cwd), Path::new("/work/rel/x"));
    }
}
