//! Points-possible extraction for assignment columns.

use gsync_model::PointsMap;

/// Default when neither the metadata row nor the header text declares a
/// maximum.
pub const DEFAULT_POINTS: &str = "10";

/// Resolve the points possible for a source assignment column.
///
/// Precedence is deliberate: the explicit points metadata row wins over a
/// parenthesized suffix embedded in the header text, which wins over the
/// hardcoded default of "10".
pub fn extract_points(header: &str, points_hints: Option<&PointsMap>) -> String {
    if let Some(hints) = points_hints
        && let Some(raw) = hints.get(header)
        && !raw.is_empty()
    {
        let digits: String = raw
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == '.')
            .collect();
        if !digits.is_empty() && digits.parse::<f64>().is_ok() {
            return digits;
        }
    }

    embedded_points(header).unwrap_or_else(|| DEFAULT_POINTS.to_string())
}

/// Look for a parenthesized points suffix in the header itself, e.g.
/// "Quiz 1 (15 pts)" or "Final (100 points)" or "HW 2 (20)".
fn embedded_points(header: &str) -> Option<String> {
    let mut rest = header;
    while let Some(open) = rest.find('(') {
        let inner = &rest[open + 1..];
        if let Some(close) = inner.find(')')
            && let Some(points) = points_group(&inner[..close])
        {
            return Some(points);
        }
        rest = inner;
    }
    None
}

/// Match `<digits>` optionally followed by whitespace and "pts"/"points",
/// case-insensitive.
fn points_group(inner: &str) -> Option<String> {
    let digits: String = inner.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let tail = inner[digits.len()..].trim_start();
    if tail.is_empty() || tail.eq_ignore_ascii_case("pts") || tail.eq_ignore_ascii_case("points") {
        Some(digits)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_suffix_variants() {
        assert_eq!(embedded_points("Quiz 1 (15 pts)"), Some("15".to_string()));
        assert_eq!(
            embedded_points("Final (100 points)"),
            Some("100".to_string())
        );
        assert_eq!(embedded_points("HW 2 (20)"), Some("20".to_string()));
        assert_eq!(embedded_points("Exam (25 PTS)"), Some("25".to_string()));
        assert_eq!(embedded_points("Quiz 1"), None);
        assert_eq!(embedded_points("Lab (makeup)"), None);
    }

    #[test]
    fn later_group_matches_when_first_does_not() {
        assert_eq!(
            embedded_points("Quiz (retake) (15 pts)"),
            Some("15".to_string())
        );
    }
}
