//! End-to-end pipeline tests over in-memory CSV fixtures.

use gsync_advisory::{AdvisoryError, Summarizer, UNAVAILABLE_MESSAGE, Unavailable};
use gsync_cli::pipeline::{MergeOptions, build_inspect_report, build_merge_report};
use gsync_model::Mapping;

const SOURCE_CSV: &str = "\
Name,ID,Quiz 1,Quiz 2
Max Points,,10,15
\"O'Brien, Pat\",101,9,12
Lee Sam,102,7,
Ghost Student,999,5,5
";

const TARGET_CSV: &str = "\
Student,SIS User ID,Section,Quiz 1
,Points Possible,,10
\"O'Brien, Pat\",101,A,
\"Sam, Lee\",102,A,
\"New, Kid\",103,A,
";

fn merge_fixture(options: MergeOptions) -> gsync_cli::types::MergeReport {
    build_merge_report(
        SOURCE_CSV,
        TARGET_CSV,
        "mom.csv",
        "canvas.csv",
        options,
        &Unavailable,
    )
    .unwrap()
}

#[test]
fn automatic_proposal_produces_the_import_file() {
    let report = merge_fixture(MergeOptions::default());

    // Quiz 1 updates the existing column; Quiz 2 is created.
    assert_eq!(report.mappings.len(), 2);
    assert_eq!(report.mappings[0].target_column, "Quiz 1");
    assert_eq!(report.mappings[1].target_column, "Quiz 2");
    assert_eq!(report.mappings[1].points.as_deref(), Some("15"));
    assert_eq!(
        report.final_headers,
        vec!["Student", "SIS User ID", "Section", "Quiz 1", "Quiz 2"]
    );

    // Two matched by SIS id, one unmatched roster row; the extra source
    // student is simply never consulted.
    assert_eq!(report.total(), 3);
    assert_eq!(report.matched_count, 2);
    assert!(!report.merged[2].matched);

    assert_eq!(
        report.csv,
        "Student,SIS User ID,Section,Quiz 1,Quiz 2\n\
         Points Possible,Points Possible,,10,15\n\
         \"O'Brien, Pat\",101,A,9,12\n\
         \"Sam, Lee\",102,A,7,\n\
         \"New, Kid\",103,A,,"
    );
}

#[test]
fn stats_cover_the_first_mapped_column() {
    let report = merge_fixture(MergeOptions::default());
    let stats = report.stats.unwrap();
    assert_eq!(stats.min, 7.0);
    assert_eq!(stats.max, 9.0);
    // Upper-middle median of [7, 9].
    assert_eq!(stats.median, 9.0);
    assert_eq!(stats.distribution[0].range, "0-60");
    assert_eq!(stats.distribution[0].count, 2);
}

#[test]
fn explicit_plan_overrides_the_proposal() {
    let options = MergeOptions {
        plan: Some(vec![
            Mapping::new("Quiz 2", "Imported Quiz").with_points("15"),
        ]),
        advisory: false,
    };
    let report = merge_fixture(options);
    assert_eq!(
        report.final_headers,
        vec!["Student", "SIS User ID", "Section", "Quiz 1", "Imported Quiz"]
    );
    assert_eq!(report.merged[0].merged["Imported Quiz"], "12");
    // The pre-existing Quiz 1 column is left untouched by this plan.
    assert_eq!(report.merged[0].merged["Quiz 1"], "");
}

#[test]
fn invalid_plans_are_rejected_with_context() {
    let options = MergeOptions {
        plan: Some(vec![Mapping::new("Nope", "Quiz 1")]),
        advisory: false,
    };
    let error = build_merge_report(
        SOURCE_CSV,
        TARGET_CSV,
        "mom.csv",
        "canvas.csv",
        options,
        &Unavailable,
    )
    .unwrap_err();
    assert!(error.to_string().contains("invalid mapping plan"));
}

#[test]
fn empty_files_report_no_data() {
    let error = build_merge_report(
        "\n\n",
        TARGET_CSV,
        "mom.csv",
        "canvas.csv",
        MergeOptions::default(),
        &Unavailable,
    )
    .unwrap_err();
    assert_eq!(error.to_string(), "mom.csv: file contains no data");
}

#[test]
fn advisory_failure_never_affects_the_csv() {
    struct Exploding;
    impl Summarizer for Exploding {
        fn summarize(&self, _stats_text: &str) -> Result<String, AdvisoryError> {
            Err(AdvisoryError::Service("network down".to_string()))
        }
    }
    let baseline = merge_fixture(MergeOptions::default());
    let with_advisory = build_merge_report(
        SOURCE_CSV,
        TARGET_CSV,
        "mom.csv",
        "canvas.csv",
        MergeOptions {
            plan: None,
            advisory: true,
        },
        &Exploding,
    )
    .unwrap();
    assert_eq!(with_advisory.csv, baseline.csv);
    assert_eq!(
        with_advisory.narrative.as_deref(),
        Some("Error generating analysis.")
    );
}

#[test]
fn missing_credential_degrades_to_placeholder() {
    let report = merge_fixture(MergeOptions {
        plan: None,
        advisory: true,
    });
    assert_eq!(report.narrative.as_deref(), Some(UNAVAILABLE_MESSAGE));
}

#[test]
fn advisory_receives_the_stats_payload() {
    struct Capture;
    impl Summarizer for Capture {
        fn summarize(&self, stats_text: &str) -> Result<String, AdvisoryError> {
            assert!(stats_text.starts_with("Average: 8.00, Median: 9"));
            assert!(stats_text.contains("\"range\":\"0-60\",\"count\":2"));
            Ok(format!("Narrative for: {stats_text}"))
        }
    }
    let report = build_merge_report(
        SOURCE_CSV,
        TARGET_CSV,
        "mom.csv",
        "canvas.csv",
        MergeOptions {
            plan: None,
            advisory: true,
        },
        &Capture,
    )
    .unwrap();
    assert!(
        report
            .narrative
            .as_deref()
            .unwrap()
            .starts_with("Narrative for: Average: 8.00")
    );
}

#[test]
fn inspect_reports_structure() {
    let report = build_inspect_report(TARGET_CSV, "canvas.csv");
    assert_eq!(
        report.headers,
        vec!["Student", "SIS User ID", "Section", "Quiz 1"]
    );
    // "Student" slips past the identity-keyword filter; the inspect view
    // reports the same candidates the mapper would offer.
    assert_eq!(report.assignment_columns, vec!["Student", "Quiz 1"]);
    assert!(report.has_points_row);
    assert_eq!(report.row_count, 3);
}

#[test]
fn inspect_degrades_empty_input_to_an_empty_report() {
    let report = build_inspect_report("\n  \n", "empty.csv");
    assert!(report.headers.is_empty());
    assert!(report.assignment_columns.is_empty());
    assert!(!report.has_points_row);
    assert_eq!(report.row_count, 0);
}
