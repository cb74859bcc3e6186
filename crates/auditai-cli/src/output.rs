//! Output formatting for auditai.
//!
//! Provides plain-text tables for terminals and pretty JSON for pipelines.
//! No function in this module panics on odd input: empty datasets, missing
//! cells and undefined compliance all render.

use clap::ValueEnum;
use serde::Serialize;

use auditai_core::{format_percent, AuditSummary, ColumnProfile, Dataset};

/// Longest cell rendered in a preview before truncation.
const MAX_CELL_WIDTH: usize = 24;

/// Width of the overall-compliance progress bar.
const BAR_WIDTH: usize = 30;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `[#########.....]` for a fraction, clamped to `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        text.to_string()
    } else {
        let kept: String = text.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{kept}...")
    }
}

/// Render rows as an aligned table with a header underline.
fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let fmt_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&fmt_row(headers));
    out.push('\n');
    let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&fmt_row(&underline));
    out.push('\n');
    for row in rows {
        out.push_str(&fmt_row(row));
        out.push('\n');
    }
    out
}

/// Data preview: the first rows of the dataset with a row index column.
pub fn render_preview(dataset: &Dataset) -> String {
    let mut headers = vec![String::new()];
    headers.extend(dataset.columns().iter().map(|c| truncate(c)));

    let rows: Vec<Vec<String>> = dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once(i.to_string())
                .chain(
                    row.iter()
                        .map(|cell| truncate(cell.as_deref().unwrap_or(""))),
                )
                .collect()
        })
        .collect();

    table(&headers, &rows)
}

/// `Rows = r | Columns = c`.
pub fn render_shape(dataset: &Dataset) -> String {
    let (rows, columns) = dataset.shape();
    format!("Rows = {rows} | Columns = {columns}")
}

/// Human-readable audit summary.
pub fn render_summary(summary: &AuditSummary) -> String {
    let mut out = String::new();

    out.push_str("Detected components\n");
    out.push_str(&summary.components.join(", "));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Overall Compliance: {}  {}\n",
        format_percent(Some(summary.overall.fraction)),
        progress_bar(summary.overall.fraction, BAR_WIDTH)
    ));
    out.push_str(&format!("  method: {}\n", summary.overall.method));
    out.push_str(&format!(
        "  target: {}\n\n",
        format_percent(Some(summary.target))
    ));

    out.push_str("Component Compliance\n");
    let headers = vec!["component".to_string(), "compliance_%".to_string()];
    let rows: Vec<Vec<String>> = summary
        .component_compliance
        .iter()
        .map(|c| {
            vec![
                c.component.clone(),
                c.percent()
                    .map(|p| format!("{p:.1}"))
                    .unwrap_or_else(|| "N/A".to_string()),
            ]
        })
        .collect();
    out.push_str(&table(&headers, &rows));
    out.push('\n');

    out.push_str("Recommendations\n");
    for rec in &summary.recommendations {
        out.push_str(&format!("- {rec}\n"));
    }
    out
}

/// Per-column detection profile table.
pub fn render_profiles(profiles: &[ColumnProfile]) -> String {
    let headers: Vec<String> = ["column", "mapped", "yes", "no", "unmapped", "ratio", "boolean_like"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows: Vec<Vec<String>> = profiles
        .iter()
        .map(|p| {
            vec![
                truncate(&p.name),
                p.mapped.to_string(),
                p.true_count.to_string(),
                p.false_count.to_string(),
                p.unmapped.to_string(),
                format!("{:.2}", p.ratio),
                if p.boolean_like { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    table(&headers, &rows)
}
