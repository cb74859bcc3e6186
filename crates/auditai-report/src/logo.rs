//! # Logo Resolution
//!
//! Finds an image to place in the report header. Lookup order:
//!
//! 1. the explicitly requested path, if it exists;
//! 2. the `AUDITAI_LOGO` environment variable, if it names a file;
//! 3. the first well-known file name found in each search directory.
//!
//! When nothing is found the report draws a vector badge instead.

use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming a logo file.
pub const LOGO_ENV_VAR: &str = "AUDITAI_LOGO";

/// File names tried, in order, inside each search directory.
pub const LOGO_CANDIDATES: [&str; 6] = [
    "nhs_logo.png",
    "nhs-logo.png",
    "logo.png",
    "nhs_logo.jpg",
    "nhs_logo.jpeg",
    "logo.jpg",
];

/// Where the report's logo came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    /// An image file embedded in the PDF.
    File(PathBuf),
    /// The drawn fallback badge.
    VectorBadge,
}

impl fmt::Display for LogoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file: {}", path.display()),
            Self::VectorBadge => write!(f, "vector badge (no logo file found)"),
        }
    }
}

/// Resolve a logo file using the explicit path, the environment, and the
/// search directories.
pub fn resolve_logo_path(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    let from_env = std::env::var_os(LOGO_ENV_VAR).map(PathBuf::from);
    resolve_with(explicit, from_env.as_deref(), search_dirs)
}

/// Resolution with the environment value passed in.
pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    search_dirs: &[PathBuf],
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "requested logo not found; searching defaults");
    }

    if let Some(path) = from_env {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            path = %path.display(),
            "{LOGO_ENV_VAR} does not name a file; ignoring"
        );
    }

    search_dirs
        .iter()
        .flat_map(|dir| LOGO_CANDIDATES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}
