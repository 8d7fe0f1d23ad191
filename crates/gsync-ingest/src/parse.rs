use std::collections::BTreeMap;

use tracing::debug;

use gsync_model::{PointsMap, Record, Table};

use crate::error::ParseError;

/// Split one CSV line into raw fields.
///
/// A double-quote toggles "inside quoted field" mode and is kept in the
/// field; a comma separates fields only outside quotes. Cleanup (trimming
/// and unquoting) happens afterwards in [`clean_field`].
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields.iter().map(|field| clean_field(field)).collect()
}

/// Normalize one raw field: trim surrounding whitespace, strip one leading
/// and one trailing double-quote if present, then collapse doubled quotes.
/// The order matters for fields like `"10,5"` and `"She said ""hi"""`.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.replace("\"\"", "\"")
}

/// Detect the second-row points-possible convention.
///
/// MyOpenMath puts "Max" (or "Max Points") in the first cell; Canvas puts
/// the literal "Points Possible" somewhere in the row.
fn is_points_row(fields: &[String]) -> bool {
    let first = fields
        .first()
        .map(|f| f.trim().to_lowercase())
        .unwrap_or_default();
    let mom_max_row = first.contains("max");
    let canvas_points_row = fields.iter().any(|f| f.trim() == "Points Possible");
    mom_max_row || canvas_points_row
}

/// Parse raw CSV text into a [`Table`].
///
/// Lines are split on LF or CRLF; blank lines are dropped. Row 1 is always
/// headers; row 2 is consumed as the points-possible row when it matches
/// the convention; remaining lines become records mapped positionally to
/// headers, padding ragged rows with empty strings.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when no non-empty lines remain.
/// Callers treat this as an empty table, not a fault.
pub fn parse_csv(text: &str) -> Result<Table, ParseError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let headers = split_fields(lines[0]);
    let mut table = Table::new(headers);

    let mut data_start = 1;
    if lines.len() > 1 {
        let second = split_fields(lines[1]);
        if is_points_row(&second) {
            let mut points: PointsMap = BTreeMap::new();
            for (idx, header) in table.headers.iter().enumerate() {
                // Raw value kept as-is; consumers clean it up when needed.
                let value = second.get(idx).cloned().unwrap_or_default();
                points.insert(header.clone(), value);
            }
            table.points_possible_row = Some(points);
            data_start = 2;
        }
    }

    for line in &lines[data_start..] {
        let values = split_fields(line);
        let mut row = Record::new();
        for (idx, header) in table.headers.iter().enumerate() {
            let value = values.get(idx).cloned().unwrap_or_default();
            row.insert(header.clone(), value);
        }
        table.rows.push(row);
    }

    debug!(
        headers = table.headers.len(),
        rows = table.rows.len(),
        points_row = table.points_possible_row.is_some(),
        "parsed gradebook csv"
    );
    Ok(table)
}

/// Parse, degrading [`ParseError::EmptyInput`] to an empty table.
pub fn parse_csv_lenient(text: &str) -> Table {
    parse_csv(text).unwrap_or_default()
}
