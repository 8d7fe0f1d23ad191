//! Mapping plan state for the interactive editing workflow.
//!
//! The plan mirrors what a user does in the mapper screen: add rows, pick
//! source columns, switch a target between an existing column and a newly
//! created one, and remove rows. Validation gates the merge step; invalid
//! plans are a blocked state, not a panic.

use gsync_model::{Mapping, PointsMap};

use crate::error::MappingError;
use crate::points::{DEFAULT_POINTS, extract_points};

/// An editable list of mappings plus the source points hints used to seed
/// points for newly created columns.
#[derive(Debug, Clone, Default)]
pub struct MappingPlan {
    mappings: Vec<Mapping>,
    points_hints: Option<PointsMap>,
}

impl MappingPlan {
    pub fn new(points_hints: Option<PointsMap>) -> Self {
        Self {
            mappings: Vec::new(),
            points_hints,
        }
    }

    /// Seed a plan from an existing mapping list (bulk proposal or a loaded
    /// plan file).
    pub fn from_mappings(mappings: Vec<Mapping>, points_hints: Option<PointsMap>) -> Self {
        Self {
            mappings,
            points_hints,
        }
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn into_mappings(self) -> Vec<Mapping> {
        self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Append a blank "in progress" row.
    pub fn add_blank(&mut self) -> usize {
        self.mappings.push(
            Mapping::new("", "").with_points(DEFAULT_POINTS),
        );
        self.mappings.len() - 1
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.mappings.len() {
            self.mappings.remove(index);
        }
    }

    /// Select the source column for a row. When the target is still empty
    /// the target defaults to the same name (create-new) and its points are
    /// recomputed.
    pub fn set_source(&mut self, index: usize, column: &str) {
        let hints = self.points_hints.clone();
        let Some(mapping) = self.mappings.get_mut(index) else {
            return;
        };
        mapping.source_column = column.to_string();
        if mapping.target_column.is_empty() {
            mapping.target_column = column.to_string();
            mapping.points = Some(extract_points(column, hints.as_ref()));
        }
    }

    /// Point a row at an existing target column, clearing any custom
    /// new-column name.
    pub fn set_target_existing(&mut self, index: usize, column: &str) {
        if let Some(mapping) = self.mappings.get_mut(index) {
            mapping.target_column = column.to_string();
        }
    }

    /// Switch a row to create-new mode: the new name is seeded from the
    /// current source column and points are recomputed.
    pub fn make_new(&mut self, index: usize) {
        let hints = self.points_hints.clone();
        if let Some(mapping) = self.mappings.get_mut(index) {
            mapping.target_column = mapping.source_column.clone();
            mapping.points = Some(extract_points(&mapping.source_column, hints.as_ref()));
        }
    }

    /// Rename the new column a row will create.
    pub fn rename_new(&mut self, index: usize, name: &str) {
        if let Some(mapping) = self.mappings.get_mut(index) {
            mapping.target_column = name.to_string();
        }
    }

    /// Override the points for a row's new column.
    pub fn set_points(&mut self, index: usize, points: &str) {
        if let Some(mapping) = self.mappings.get_mut(index) {
            mapping.points = Some(points.to_string());
        }
    }

    /// Gate for the merge step: the plan must be non-empty, every mapping
    /// complete, and every source column present in the source table.
    pub fn validate(&self, source_headers: &[String]) -> Result<(), MappingError> {
        if self.mappings.is_empty() {
            return Err(MappingError::EmptyPlan);
        }
        for (index, mapping) in self.mappings.iter().enumerate() {
            if !mapping.is_complete() {
                return Err(MappingError::Incomplete { index });
            }
            if !source_headers.iter().any(|h| h == &mapping.source_column) {
                return Err(MappingError::UnknownSourceColumn {
                    column: mapping.source_column.clone(),
                });
            }
        }
        Ok(())
    }
}
