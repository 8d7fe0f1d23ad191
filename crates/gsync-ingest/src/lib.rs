pub mod error;
pub mod parse;

pub use error::ParseError;
pub use parse::{parse_csv, parse_csv_lenient};
