//! Merge pipeline: raw CSV text in, [`MergeReport`] out.
//!
//! All file access stays in the command layer; everything here operates on
//! already-decoded text so the full pipeline is testable in memory.

use anyhow::{Result, bail};
use tracing::{debug, info};

use gsync_advisory::{NarrativeCell, Summarizer, narrative_or_fallback};
use gsync_ingest::{parse_csv, parse_csv_lenient};
use gsync_map::{MappingPlan, propose_all};
use gsync_model::{Mapping, Table};
use gsync_output::build_output;
use gsync_recon::{
    compute_stats, final_headers, matching::target_name_column, merge, resolve_points_map,
    stats_summary,
};

use crate::logging::redact_value;
use crate::types::{InspectReport, MergeReport};

/// Pipeline inputs beyond the two CSV texts.
#[derive(Debug, Default)]
pub struct MergeOptions {
    /// A pre-made mapping plan; `None` runs the automatic proposal.
    pub plan: Option<Vec<Mapping>>,
    /// Whether to request an advisory narrative for the stats.
    pub advisory: bool,
}

/// Run the full reconciliation pipeline over two parsed-from-text tables.
///
/// `source_name`/`target_name` are display names only; no filesystem
/// access happens here.
pub fn build_merge_report(
    source_text: &str,
    target_text: &str,
    source_name: &str,
    target_name: &str,
    options: MergeOptions,
    summarizer: &dyn Summarizer,
) -> Result<MergeReport> {
    let source = parse_table(source_text, source_name)?;
    let target = parse_table(target_text, target_name)?;

    let mappings = match options.plan {
        Some(plan) => plan,
        None => propose_all(
            &source.headers,
            &target.headers,
            source.points_possible_row.as_ref(),
        ),
    };
    let plan = MappingPlan::from_mappings(mappings, source.points_possible_row.clone());
    if let Err(error) = plan.validate(&source.headers) {
        bail!("invalid mapping plan: {error}");
    }
    let mappings = plan.into_mappings();
    info!(mappings = mappings.len(), "mapping plan ready");

    let headers = final_headers(&target.headers, &mappings);
    let points_map = resolve_points_map(
        target.points_possible_row.as_ref(),
        &target.headers,
        &mappings,
        &headers,
    );
    let merged = merge(&target, &source, &mappings);
    let matched_count = merged.iter().filter(|record| record.matched).count();
    log_unmatched(&merged, &target);

    // Statistics are always computed over the first mapping's target. The
    // narrative lives in its own cell, outside the CSV path.
    let stats = compute_stats(&merged, &mappings[0].target_column);
    let mut narrative = NarrativeCell::new();
    if let (Some(stats), true) = (&stats, options.advisory) {
        narrative.record(narrative_or_fallback(summarizer, &stats_summary(stats)));
    }

    let csv = build_output(&headers, &merged, &points_map);
    info!(
        total = merged.len(),
        matched = matched_count,
        columns = headers.len(),
        "merge complete"
    );

    Ok(MergeReport {
        source_name: source_name.to_string(),
        target_name: target_name.to_string(),
        mappings,
        final_headers: headers,
        target_headers: target.headers,
        merged,
        matched_count,
        stats,
        narrative: narrative.latest().map(str::to_string),
        csv,
    })
}

/// Summarize the structure of a single export.
///
/// Empty input is an inspectable state here: the report simply shows zero
/// columns and rows.
pub fn build_inspect_report(text: &str, file_name: &str) -> InspectReport {
    let table = parse_csv_lenient(text);
    InspectReport {
        file_name: file_name.to_string(),
        assignment_columns: gsync_map::assignment_columns(&table.headers),
        has_points_row: table.points_possible_row.is_some(),
        row_count: table.rows.len(),
        headers: table.headers,
    }
}

fn parse_table(text: &str, name: &str) -> Result<Table> {
    match parse_csv(text) {
        Ok(table) => Ok(table),
        // An empty table is a visible, correctable state, reported as
        // "no data" rather than a parse crash.
        Err(gsync_ingest::ParseError::EmptyInput) => bail!("{name}: file contains no data"),
    }
}

fn log_unmatched(merged: &[gsync_model::MergedRecord], target: &Table) {
    let Some(name_column) = target_name_column(&target.headers) else {
        return;
    };
    for record in merged.iter().filter(|record| !record.matched) {
        debug!(
            student = redact_value(Table::value(&record.original, name_column)),
            "no source record matched"
        );
    }
}
