//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping-plan validation.
///
/// These block progression to the merge step; they are never raised from
/// the reconciliation engine itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The plan contains no mappings at all.
    EmptyPlan,
    /// A mapping is missing its source or target column.
    Incomplete { index: usize },
    /// A mapping references a column absent from the source table.
    UnknownSourceColumn { column: String },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlan => write!(f, "mapping plan is empty"),
            Self::Incomplete { index } => {
                write!(f, "mapping {} is missing a source or target column", index + 1)
            }
            Self::UnknownSourceColumn { column } => {
                write!(f, "source column not found: {column}")
            }
        }
    }
}

impl std::error::Error for MappingError {}
