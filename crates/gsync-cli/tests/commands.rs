//! File-I/O tests for the command layer: real CSV files in, a real import
//! file (and optional plan file) out.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use gsync_cli::cli::{InspectArgs, MergeArgs};
use gsync_cli::commands::{run_inspect, run_merge};
use gsync_map::load_plan;

const SOURCE_CSV: &str = "\
Name,ID,Quiz 1,Quiz 2
Max Points,,10,15
\"O'Brien, Pat\",101,9,12
Lee Sam,102,7,
";

const TARGET_CSV: &str = "\
Student,SIS User ID,Section,Quiz 1
,Points Possible,,10
\"O'Brien, Pat\",101,A,
\"Sam, Lee\",102,A,
\"New, Kid\",103,A,
";

const EXPECTED_IMPORT: &str = "\
Student,SIS User ID,Section,Quiz 1,Quiz 2\n\
Points Possible,Points Possible,,10,15\n\
\"O'Brien, Pat\",101,A,9,12\n\
\"Sam, Lee\",102,A,7,\n\
\"New, Kid\",103,A,,";

fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let source = dir.join("mom.csv");
    let target = dir.join("canvas.csv");
    fs::write(&source, SOURCE_CSV).unwrap();
    fs::write(&target, TARGET_CSV).unwrap();
    (source, target)
}

fn merge_args(dir: &Path) -> MergeArgs {
    let (source, target) = write_fixtures(dir);
    MergeArgs {
        source,
        target,
        output: dir.join("import.csv"),
        plan: None,
        save_plan: None,
        dry_run: false,
        advisory: false,
    }
}

#[test]
fn merge_writes_the_import_file() {
    let dir = TempDir::new().unwrap();
    let args = merge_args(dir.path());
    let report = run_merge(&args).unwrap();
    assert_eq!(report.matched_count, 2);
    assert_eq!(fs::read_to_string(&args.output).unwrap(), EXPECTED_IMPORT);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut args = merge_args(dir.path());
    args.dry_run = true;
    let report = run_merge(&args).unwrap();
    // The report is still complete; only the write is skipped.
    assert_eq!(report.csv, EXPECTED_IMPORT);
    assert!(!args.output.exists());
}

#[test]
fn saved_plan_reproduces_the_merge() {
    let dir = TempDir::new().unwrap();
    let plan_path = dir.path().join("plan.json");
    let mut args = merge_args(dir.path());
    args.save_plan = Some(plan_path.clone());
    run_merge(&args).unwrap();

    let saved = load_plan(&plan_path).unwrap();
    assert_eq!(saved.len(), 2);

    let mut rerun = merge_args(dir.path());
    rerun.plan = Some(plan_path);
    rerun.dry_run = true;
    let report = run_merge(&rerun).unwrap();
    assert_eq!(report.csv, EXPECTED_IMPORT);
}

#[test]
fn unreadable_source_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let mut args = merge_args(dir.path());
    args.source = dir.path().join("missing.csv");
    let error = run_merge(&args).unwrap_err();
    assert!(format!("{error:#}").contains("missing.csv"));
    assert!(!args.output.exists());
}

#[test]
fn inspect_reads_a_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let (_, target) = write_fixtures(dir.path());
    let report = run_inspect(&InspectArgs { file: target }).unwrap();
    assert_eq!(
        report.headers,
        vec!["Student", "SIS User ID", "Section", "Quiz 1"]
    );
    assert!(report.has_points_row);
    assert_eq!(report.row_count, 3);
}
