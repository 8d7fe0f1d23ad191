pub mod error;
pub mod plan;
pub mod points;
pub mod propose;
pub mod repository;

pub use error::MappingError;
pub use plan::MappingPlan;
pub use points::{DEFAULT_POINTS, extract_points};
pub use propose::{assignment_columns, is_assignment_column, propose_all};
pub use repository::{load_plan, save_plan};
