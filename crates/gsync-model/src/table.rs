#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single row keyed by column name.
///
/// Every record produced by the parser carries an entry for every header
/// (missing trailing fields are filled with empty strings), so lookups by
/// header never need a fallback in the happy path.
pub type Record = BTreeMap<String, String>;

/// Per-column "points possible" values, keyed by header.
pub type PointsMap = BTreeMap<String, String>;

/// A parsed gradebook export.
///
/// `headers` preserves the original column order verbatim; `rows` are keyed
/// records so unrecognized columns round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
    /// The optional second-row points metadata (Canvas "Points Possible" or
    /// MyOpenMath "Max" convention), raw values aligned by header.
    pub points_possible_row: Option<PointsMap>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            points_possible_row: None,
        }
    }

    /// True when the table has no columns at all (empty input degrades here).
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Value of `column` in `row`, empty string when absent.
    pub fn value<'a>(row: &'a Record, column: &str) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

/// One target roster row after reconciliation.
///
/// Derived fresh from (target table, source table, mappings) on every
/// recomputation; consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord {
    /// The untouched target record.
    pub original: Record,
    /// Target record plus mapped source values plus empty-initialized new
    /// columns.
    pub merged: Record,
    /// Whether a source record was paired with this row. An unmatched row is
    /// a designed outcome, not an error.
    pub matched: bool,
}
