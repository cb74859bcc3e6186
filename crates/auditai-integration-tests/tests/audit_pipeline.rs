//! # End-to-End Audit Pipeline
//!
//! File on disk → ingest → audit → report, across crate boundaries.

use std::path::Path;

use auditai_core::{audit, AuditConfig, CoreError, OverallMethod, DEFAULT_TARGET};
use auditai_ingest::{load_dataset, IngestError};
use auditai_report::{build_pdf, render_pdf, LogoSource, ReportRequest};
use chrono::TimeZone;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// =========================================================================
// CSV → audit
// =========================================================================

#[test]
fn csv_with_explicit_compliant_column_uses_it_for_overall() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "hand_hygiene.csv",
        "ward,before_contact,after_contact,Compliant\n\
         A,Yes,Yes,Yes\n\
         A,Yes,No,No\n\
         B,No,Yes,No\n\
         B,Yes,Yes,Yes\n",
    );

    let dataset = load_dataset(&path).unwrap();
    let summary = audit(&dataset, "hand_hygiene.csv", &AuditConfig::default()).unwrap();

    assert_eq!(summary.n_records, 4);
    assert_eq!(
        summary.components,
        vec!["before_contact", "after_contact", "Compliant"]
    );
    assert_eq!(summary.overall.fraction, 0.5);
    assert_eq!(
        summary.overall.method,
        OverallMethod::ExplicitColumn("Compliant".into())
    );
    assert_eq!(summary.component_compliance[0].compliance, Some(0.75));
    assert_eq!(summary.recommendations.len(), 3);
    assert!(summary.recommendations[0].contains("~45% gap"));
}

#[test]
fn csv_without_explicit_column_ands_components_and_forgives_blanks() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "consent.csv",
        "patient,consent,allergies\n\
         p1,yes,yes\n\
         p2,yes,\n\
         p3,no,yes\n\
         p4,yes,n/a\n",
    );

    let dataset = load_dataset(&path).unwrap();
    let summary = audit(&dataset, "consent.csv", &AuditConfig::default()).unwrap();

    // allergies: yes, missing, yes, "n/a" -> 2 of 4 mapped, still boolean-like.
    assert_eq!(summary.components, vec!["consent", "allergies"]);
    assert_eq!(summary.overall.method, OverallMethod::AllComponents);
    // Only p3 fails; blanks and n/a do not penalise.
    assert_eq!(summary.overall.fraction, 0.75);
    assert_eq!(summary.overall.passing_rows(), 3);
    assert_eq!(summary.component_compliance[1].valid, 2);
    assert_eq!(summary.component_compliance[1].compliance, Some(1.0));
}

#[test]
fn csv_padded_compliant_header_is_not_the_explicit_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "padded.csv",
        "a, compliant\nyes,yes\nno,yes\nyes,yes\nyes,no\n",
    );

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.columns(), &["a", " compliant"]);
    let summary = audit(&dataset, "padded.csv", &AuditConfig::default()).unwrap();

    assert_eq!(summary.components, vec!["a", " compliant"]);
    assert_eq!(summary.overall.method, OverallMethod::AllComponents);
    assert_eq!(summary.overall.fraction, 0.5);
}

#[test]
fn csv_numeric_flags_are_boolean_like() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "flags.csv", "documented\n1\n1\n0\n1\n");

    let dataset = load_dataset(&path).unwrap();
    let summary = audit(&dataset, "flags.csv", &AuditConfig::default()).unwrap();
    assert_eq!(summary.overall.fraction, 0.75);
}

#[test]
fn csv_without_boolean_columns_reports_no_components() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "scores.csv", "ward,score\nA,7\nB,8\n");

    let dataset = load_dataset(&path).unwrap();
    let err = audit(&dataset, "scores.csv", &AuditConfig::default()).unwrap_err();
    assert!(matches!(err, CoreError::NoBooleanColumns));
    assert!(err.to_string().contains("Add one like 'compliant'"));
}

#[test]
fn full_compliance_yields_maintenance_recommendation() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "ok.csv", "compliant\nyes\nyes\nTRUE\ny\n");

    let dataset = load_dataset(&path).unwrap();
    let summary = audit(&dataset, "ok.csv", &AuditConfig::default()).unwrap();
    assert!(summary.meets_target());
    assert_eq!(
        summary.recommendations,
        vec!["Maintain gains via induction teaching and monthly spot checks."]
    );
    assert_eq!(summary.target, DEFAULT_TARGET);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "audit.txt", "compliant\nyes\n");
    assert!(matches!(
        load_dataset(&path),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

// =========================================================================
// Excel → audit
// =========================================================================

#[test]
fn xlsx_pipeline_matches_equivalent_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let xlsx = tmp.path().join("audit.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "ward").unwrap();
    sheet.write_string(0, 1, "consent").unwrap();
    sheet.write_string(0, 2, "documented").unwrap();
    let rows = [("A", "Yes", 1.0), ("B", "No", 1.0), ("C", "Yes", 0.0)];
    for (i, (ward, consent, documented)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, *ward).unwrap();
        sheet.write_string(r, 1, *consent).unwrap();
        sheet.write_number(r, 2, *documented).unwrap();
    }
    workbook.save(&xlsx).unwrap();

    let csv = write(
        tmp.path(),
        "audit.csv",
        "ward,consent,documented\nA,Yes,1\nB,No,1\nC,Yes,0\n",
    );

    let from_xlsx = audit(
        &load_dataset(&xlsx).unwrap(),
        "audit.xlsx",
        &AuditConfig::default(),
    )
    .unwrap();
    let from_csv = audit(
        &load_dataset(&csv).unwrap(),
        "audit.csv",
        &AuditConfig::default(),
    )
    .unwrap();

    assert_eq!(from_xlsx.components, from_csv.components);
    assert_eq!(from_xlsx.component_compliance, from_csv.component_compliance);
    assert_eq!(from_xlsx.overall.fraction, from_csv.overall.fraction);
    assert!((from_xlsx.overall.fraction - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn xlsx_boolean_cells_are_detected() {
    let tmp = tempfile::tempdir().unwrap();
    let xlsx = tmp.path().join("bools.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "checked").unwrap();
    sheet.write_boolean(1, 0, true).unwrap();
    sheet.write_boolean(2, 0, false).unwrap();
    workbook.save(&xlsx).unwrap();

    let summary = audit(
        &load_dataset(&xlsx).unwrap(),
        "bools.xlsx",
        &AuditConfig::default(),
    )
    .unwrap();
    assert_eq!(summary.components, vec!["checked"]);
    assert_eq!(summary.overall.fraction, 0.5);
}

// =========================================================================
// audit → PDF
// =========================================================================

#[test]
fn csv_to_pdf_report() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "audit.csv",
        "consent,documented\nyes,yes\nno,yes\nyes,no\n",
    );

    let dataset = load_dataset(&path).unwrap();
    let config = AuditConfig::default();
    let summary = audit(&dataset, "audit.csv", &config).unwrap();

    let mut request = ReportRequest::from_summary(&summary, &config.report);
    request.logo_search_dirs = vec![tmp.path().join("no-assets-here")];
    request.generated_at = chrono::Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();

    let out = tmp.path().join("reports").join("audit_report.pdf");
    let logo = build_pdf(&out, &request).unwrap();

    assert_eq!(logo, LogoSource::VectorBadge);
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(request.metrics.len(), 3);
    assert_eq!(request.metrics[0].label, "overall");
}

#[test]
fn config_file_drives_target_and_report_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "auditai.yaml",
        "target: 0.5\nreport:\n  title: Ward 7 consent audit\n  author_name: A. Clinician\n",
    );
    let path = write(tmp.path(), "audit.csv", "compliant\nyes\nno\n");

    let config = auditai_cli::settings::load_config(None, tmp.path()).unwrap();
    let summary = audit(&load_dataset(&path).unwrap(), "audit.csv", &config).unwrap();
    assert!(summary.meets_target());
    assert_eq!(summary.recommendations.len(), 1);

    let request = ReportRequest::from_summary(&summary, &config.report);
    assert_eq!(request.title, "Ward 7 consent audit");
    assert_eq!(
        request.author_line().as_deref(),
        Some("Prepared by: A. Clinician")
    );
    let (bytes, _) = render_pdf(&request).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
