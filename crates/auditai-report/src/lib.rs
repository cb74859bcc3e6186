//! # auditai-report — PDF Summary Reports
//!
//! Renders an audit summary as an A4 PDF:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Title                           [ LOGO ] │
//! │ Generated: <UTC timestamp>               │
//! │ Prepared by: <name> (<grade>)            │
//! │ Records analysed: <n>                    │
//! │                                          │
//! │ Compliance metrics                       │
//! │   overall ................ 82.5%         │
//! │   <component> ............ 90.0% / N/A   │
//! │                                          │
//! │ Recommendations                          │
//! │   - ...                                  │
//! │ AuditAI - page 1                         │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The logo is an image file found by [`resolve_logo_path`]; when none is
//! found, or the file cannot be decoded, a drawn badge takes its place.
//! [`build_pdf`] reports which one was used.

pub mod error;
pub mod logo;
mod pdf;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use auditai_core::{format_percent, AuditSummary, Metric, ReportDefaults};

pub use error::ReportError;
pub use logo::{resolve_logo_path, LogoSource, LOGO_CANDIDATES, LOGO_ENV_VAR};

use pdf::{Face, PageWriter, MARGIN, PAGE_WIDTH};
use text::{chars_per_line, sanitize, wrap};

const FOOTER_TEXT: &str = "AuditAI - clinical audit compliance summary";
const VALUE_COLUMN_X: f32 = 150.0;
const BULLET_INDENT: f32 = 5.0;
const METRIC_SIZE: f32 = 11.0;
/// Clearance between a metric label and its value.
const LABEL_GAP: f32 = 4.0;

/// Everything needed to render one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub title: String,
    /// `overall` first, then components.
    pub metrics: Vec<Metric>,
    pub n_records: usize,
    pub recommendations: Vec<String>,
    pub author_name: String,
    pub author_grade: String,
    /// Explicitly requested logo file.
    pub logo: Option<PathBuf>,
    /// Directories searched when no explicit logo resolves.
    pub logo_search_dirs: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
}

impl ReportRequest {
    /// Build a request from an audit summary and report defaults.
    pub fn from_summary(summary: &AuditSummary, defaults: &ReportDefaults) -> Self {
        Self {
            title: defaults.title.clone(),
            metrics: summary.metrics(),
            n_records: summary.n_records,
            recommendations: summary.recommendations.clone(),
            author_name: defaults.author_name.clone(),
            author_grade: defaults.author_grade.clone(),
            logo: defaults.logo.clone(),
            logo_search_dirs: defaults.assets_dirs.clone(),
            generated_at: Utc::now(),
        }
    }

    /// `Prepared by: <name> (<grade>)`, or `None` when both are blank.
    pub fn author_line(&self) -> Option<String> {
        let name = self.author_name.trim();
        let grade = self.author_grade.trim();
        match (name.is_empty(), grade.is_empty()) {
            (true, true) => None,
            (false, true) => Some(format!("Prepared by: {name}")),
            (true, false) => Some(format!("Prepared by: ({grade})")),
            (false, false) => Some(format!("Prepared by: {name} ({grade})")),
        }
    }
}

/// Write the PDF report to `output_path`, creating parent directories.
///
/// Returns where the logo came from.
pub fn build_pdf(output_path: &Path, request: &ReportRequest) -> Result<LogoSource, ReportError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let (bytes, logo) = render_pdf(request)?;
    std::fs::write(output_path, &bytes)?;

    tracing::info!(
        path = %output_path.display(),
        bytes = bytes.len(),
        logo = %logo,
        "wrote PDF report"
    );
    Ok(logo)
}

/// Render the PDF into memory.
pub fn render_pdf(request: &ReportRequest) -> Result<(Vec<u8>, LogoSource), ReportError> {
    let mut writer = PageWriter::new(&request.title, FOOTER_TEXT)?;
    let right = PAGE_WIDTH - MARGIN;

    let logo = place_logo(&writer, request);

    // Keep the title clear of the logo box.
    writer.paragraph(&request.title, 18.0, Face::Bold, MARGIN, right - 45.0, 0.0);
    writer.line(
        &format!(
            "Generated: {}",
            request.generated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        10.0,
        Face::Regular,
        MARGIN,
    );
    if let Some(author) = request.author_line() {
        writer.line(&author, 10.0, Face::Regular, MARGIN);
    }
    writer.line(
        &format!("Records analysed: {}", request.n_records),
        10.0,
        Face::Regular,
        MARGIN,
    );
    writer.skip(6.0);

    writer.line("Compliance metrics", 13.0, Face::Bold, MARGIN);
    writer.row("Metric", "Compliance", 10.0, Face::Bold, MARGIN, VALUE_COLUMN_X);
    writer.rule(0.5);
    for (i, metric) in request.metrics.iter().enumerate() {
        let face = if i == 0 { Face::Bold } else { Face::Regular };
        let mut lines = label_lines(&metric.label, METRIC_SIZE).into_iter();
        let first = lines.next().unwrap_or_default();
        writer.row(
            &first,
            &format_percent(metric.value),
            METRIC_SIZE,
            face,
            MARGIN,
            VALUE_COLUMN_X,
        );
        for cont in lines {
            writer.line(&cont, METRIC_SIZE, face, MARGIN + BULLET_INDENT);
        }
    }
    writer.skip(6.0);

    writer.line("Recommendations", 13.0, Face::Bold, MARGIN);
    if request.recommendations.is_empty() {
        writer.line("None.", 11.0, Face::Regular, MARGIN);
    }
    for rec in &request.recommendations {
        writer.paragraph(
            &format!("- {rec}"),
            11.0,
            Face::Regular,
            MARGIN,
            right,
            BULLET_INDENT,
        );
    }

    tracing::debug!(pages = writer.page_count(), "rendered report");
    let bytes = writer.finish()?;
    Ok((bytes, logo))
}

/// Wrap a metric label so no line reaches the value column. Continuation
/// lines are indented by [`BULLET_INDENT`].
fn label_lines(label: &str, size: f32) -> Vec<String> {
    let first_width = VALUE_COLUMN_X - MARGIN - LABEL_GAP;
    let first = wrap(&sanitize(label), chars_per_line(first_width, size));
    match first.split_first() {
        Some((head, rest)) if !rest.is_empty() => {
            let cont_width = first_width - BULLET_INDENT;
            std::iter::once(head.clone())
                .chain(wrap(&rest.join(" "), chars_per_line(cont_width, size)))
                .collect()
        }
        _ => first,
    }
}

fn place_logo(writer: &PageWriter, request: &ReportRequest) -> LogoSource {
    match resolve_logo_path(request.logo.as_deref(), &request.logo_search_dirs) {
        Some(path) => match writer.draw_image(&path) {
            Ok(()) => LogoSource::File(path),
            Err(reason) => {
                tracing::warn!(
                    path = %path.display(),
                    %reason,
                    "could not embed logo; drawing badge instead"
                );
                writer.draw_badge();
                LogoSource::VectorBadge
            }
        },
        None => {
            writer.draw_badge();
            LogoSource::VectorBadge
        }
    }
}
