//! Aggregate statistics over one mapped grade column.

use serde::{Deserialize, Serialize};

/// One fixed distribution band, e.g. `80-90` or `>100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub range: String,
    pub count: usize,
}

/// Summary statistics computed over matched records of the primary mapped
/// column.
///
/// The median is the element at index `n / 2` of the ascending sort: for an
/// even count that is the upper-middle value, not an interpolated midpoint.
/// Observable behavior, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeStats {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub distribution: Vec<GradeBand>,
}
