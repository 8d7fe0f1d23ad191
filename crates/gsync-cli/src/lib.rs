//! CLI library components for GradeSync.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod types;
