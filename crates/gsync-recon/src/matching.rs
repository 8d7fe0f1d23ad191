//! Student record matching between the source and target rosters.
//!
//! Identifier columns are found by name heuristics on the headers; the
//! wording is fragile by nature but changing it changes matching behavior,
//! so it is kept exactly as specified.

use gsync_model::{Record, Table};

/// Target-side identifier column: contains "SIS User ID" or is exactly
/// "ID".
pub fn target_id_column(headers: &[String]) -> Option<&String> {
    headers
        .iter()
        .find(|h| h.contains("SIS User ID") || h.as_str() == "ID")
}

/// Source-side identifier column: exactly "ID" or contains "Student ID".
pub fn source_id_column(headers: &[String]) -> Option<&String> {
    headers
        .iter()
        .find(|h| h.as_str() == "ID" || h.contains("Student ID"))
}

/// Target-side name column: contains "Student".
pub fn target_name_column(headers: &[String]) -> Option<&String> {
    headers.iter().find(|h| h.contains("Student"))
}

/// Source-side name column: contains "Name" or "Student".
pub fn source_name_column(headers: &[String]) -> Option<&String> {
    headers
        .iter()
        .find(|h| h.contains("Name") || h.contains("Student"))
}

/// Normalize a student name for the fallback comparison: lower-case, strip
/// apostrophes and double-quotes, trim.
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['\'', '"'], "")
        .trim()
        .to_string()
}

/// Find the source record for one target record.
///
/// Identifier match first (exact string equality, first match wins; source
/// identifiers are assumed unique and duplicates are a documented
/// limitation). When that fails, fall back to normalized-name equality.
/// `None` is a designed outcome, not an error.
pub fn match_source<'a>(target_record: &Record, target_headers: &[String], source: &'a Table) -> Option<&'a Record> {
    let by_id = target_id_column(target_headers)
        .zip(source_id_column(&source.headers))
        .and_then(|(target_col, source_col)| {
            let wanted = Table::value(target_record, target_col);
            source
                .rows
                .iter()
                .find(|row| Table::value(row, source_col) == wanted)
        });
    if by_id.is_some() {
        return by_id;
    }

    let target_col = target_name_column(target_headers)?;
    let source_col = source_name_column(&source.headers)?;
    let wanted = normalize_name(Table::value(target_record, target_col));
    source
        .rows
        .iter()
        .find(|row| normalize_name(Table::value(row, source_col)) == wanted)
}
