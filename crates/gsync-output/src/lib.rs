//! Import-file assembly: the serialize half of the CSV codec plus the
//! output assembler.
//!
//! The layout is fixed by the LMS bulk-import format: header row, then a
//! synthetic points-possible row, then one row per record, LF-joined.
//! Quoting is minimal so plain inputs stay bit-for-bit stable across
//! repeated round trips.

use tracing::debug;

use gsync_model::{MergedRecord, PointsMap, Record, Table};

/// Quote a field only when it contains a comma, double-quote, or newline;
/// internal quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn emit_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn points_row(headers: &[String], points_map: &PointsMap) -> String {
    emit_row(
        headers
            .iter()
            .map(|h| points_map.get(h).map(String::as_str).unwrap_or("")),
    )
}

/// Serialize a table back to CSV text.
///
/// Points values are looked up by header, empty when absent; record values
/// likewise. The result carries no trailing newline.
pub fn serialize(headers: &[String], records: &[Record], points_map: &PointsMap) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(emit_row(headers));
    lines.push(points_row(headers, points_map));
    for record in records {
        lines.push(emit_row(headers.iter().map(|h| Table::value(record, h))));
    }
    lines.join("\n")
}

/// Assemble the final import file from merged records.
pub fn build_output(
    final_headers: &[String],
    merged_records: &[MergedRecord],
    points_map: &PointsMap,
) -> String {
    let mut lines = Vec::with_capacity(merged_records.len() + 2);
    lines.push(emit_row(final_headers));
    lines.push(points_row(final_headers, points_map));
    for record in merged_records {
        lines.push(emit_row(
            final_headers.iter().map(|h| Table::value(&record.merged, h)),
        ));
    }
    debug!(
        columns = final_headers.len(),
        rows = merged_records.len(),
        "assembled import csv"
    );
    lines.join("\n")
}
