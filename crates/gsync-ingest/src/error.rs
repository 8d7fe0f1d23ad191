//! Error types for gradebook ingestion.

/// Errors from CSV parsing.
///
/// `EmptyInput` is the only variant: callers at the UI edge treat it as an
/// empty table ("no data"), not a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no non-empty lines.
    #[error("input contains no usable lines")]
    EmptyInput,
}
