//! Merged-view derivation.
//!
//! The merged view is a pure function of (target table, source table,
//! mappings) and is recomputed wholesale on any change. Input sizes are
//! bounded by one classroom roster, so there is no cache to invalidate.

use tracing::debug;

use gsync_model::{Mapping, MergedRecord, Table};

use crate::headers::final_headers;
use crate::matching::match_source;

/// Derive one [`MergedRecord`] per target record, in roster order.
///
/// Each merged record is a copy of the target record with every final
/// header defaulted to an empty string; when a source record matches,
/// every complete mapping overwrites its target column with the source
/// value. Unmatched records keep their mapped columns empty and are
/// flagged, never dropped.
pub fn merge(target: &Table, source: &Table, mappings: &[Mapping]) -> Vec<MergedRecord> {
    let headers = final_headers(&target.headers, mappings);
    let mut records = Vec::with_capacity(target.rows.len());
    for row in &target.rows {
        let source_row = match_source(row, &target.headers, source);
        let mut merged = row.clone();
        for header in &headers {
            merged.entry(header.clone()).or_default();
        }
        if let Some(source_row) = source_row {
            for mapping in mappings.iter().filter(|m| m.is_complete()) {
                let value = Table::value(source_row, &mapping.source_column);
                merged.insert(mapping.target_column.clone(), value.to_string());
            }
        }
        records.push(MergedRecord {
            original: row.clone(),
            merged,
            matched: source_row.is_some(),
        });
    }
    let matched = records.iter().filter(|r| r.matched).count();
    debug!(
        total = records.len(),
        matched,
        unmatched = records.len() - matched,
        "reconciled rosters"
    );
    records
}
