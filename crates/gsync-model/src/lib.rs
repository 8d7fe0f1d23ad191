pub mod mapping;
pub mod stats;
pub mod table;

pub use mapping::Mapping;
pub use stats::{GradeBand, GradeStats};
pub use table::{MergedRecord, PointsMap, Record, Table};
