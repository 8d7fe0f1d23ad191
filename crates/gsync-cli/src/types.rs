use gsync_model::{GradeStats, Mapping, MergedRecord};

/// Everything the merge pipeline produced, ready for display and writing.
#[derive(Debug)]
pub struct MergeReport {
    pub source_name: String,
    pub target_name: String,
    /// The mappings actually applied, in order; the first one's target is
    /// the primary statistics column.
    pub mappings: Vec<Mapping>,
    /// Output header list: target headers plus newly created columns.
    pub final_headers: Vec<String>,
    /// Headers of the target table before any new columns were added.
    pub target_headers: Vec<String>,
    pub merged: Vec<MergedRecord>,
    pub matched_count: usize,
    pub stats: Option<GradeStats>,
    pub narrative: Option<String>,
    /// The assembled import file text.
    pub csv: String,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.merged.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.merged.len() - self.matched_count
    }

    /// Mappings that create a column absent from the original target.
    pub fn new_mappings(&self) -> Vec<&Mapping> {
        self.mappings
            .iter()
            .filter(|m| m.is_new(&self.target_headers))
            .collect()
    }
}

/// Structure summary of one gradebook export.
#[derive(Debug)]
pub struct InspectReport {
    pub file_name: String,
    pub headers: Vec<String>,
    pub assignment_columns: Vec<String>,
    pub has_points_row: bool,
    pub row_count: usize,
}
