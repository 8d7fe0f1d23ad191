pub mod headers;
pub mod matching;
pub mod merge;
pub mod stats;

pub use headers::{final_headers, resolve_points_map};
pub use matching::match_source;
pub use merge::merge;
pub use stats::{compute_stats, stats_summary};
