//! Final header and points-map resolution for the import file.

use gsync_model::{Mapping, PointsMap};

/// The output header list: target headers followed by every distinct
/// mapping target not already present, in first-occurrence order.
pub fn final_headers(target_headers: &[String], mappings: &[Mapping]) -> Vec<String> {
    let mut headers = target_headers.to_vec();
    for mapping in mappings {
        if mapping.target_column.is_empty() {
            continue;
        }
        if !headers.iter().any(|h| h == &mapping.target_column) {
            headers.push(mapping.target_column.clone());
        }
    }
    headers
}

/// Resolve the points row for the output file.
///
/// Starts from the target table's own points row, overlays points declared
/// on mappings that create new columns, then guarantees the first column
/// carries the literal "Points Possible" label the LMS bulk-import format
/// requires.
pub fn resolve_points_map(
    target_points_row: Option<&PointsMap>,
    target_headers: &[String],
    mappings: &[Mapping],
    final_headers: &[String],
) -> PointsMap {
    let mut points = target_points_row.cloned().unwrap_or_default();
    for mapping in mappings {
        if mapping.is_new(target_headers)
            && let Some(value) = mapping.points.as_ref().filter(|p| !p.is_empty())
        {
            points.insert(mapping.target_column.clone(), value.clone());
        }
    }
    // The identifying column's cell must read "Points Possible"; an empty
    // inherited value counts as absent.
    if let Some(first) = final_headers.first()
        && points.get(first).is_none_or(|v| v.is_empty())
    {
        points.insert(first.clone(), "Points Possible".to_string());
    }
    points
}
