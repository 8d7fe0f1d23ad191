//! Column mapping between a source export and the target gradebook.

use serde::{Deserialize, Serialize};

/// A declared correspondence from one source column to one target column.
///
/// The target is either an existing target-table header (update) or a novel
/// name (create). "New" is a derived property, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Column name in the source (quiz platform) export.
    pub source_column: String,
    /// Column name in the target (LMS) gradebook, existing or new.
    pub target_column: String,
    /// Points possible for a newly created column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<String>,
}

impl Mapping {
    pub fn new(source_column: impl Into<String>, target_column: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            target_column: target_column.into(),
            points: None,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: impl Into<String>) -> Self {
        self.points = Some(points.into());
        self
    }

    /// True when the mapping targets a column absent from the original
    /// target headers, i.e. the import will create it.
    pub fn is_new(&self, target_headers: &[String]) -> bool {
        !self.target_column.is_empty()
            && !target_headers.iter().any(|h| h == &self.target_column)
    }

    /// A mapping is usable downstream only when both ends are named.
    pub fn is_complete(&self) -> bool {
        !self.source_column.is_empty() && !self.target_column.is_empty()
    }
}
