//! File-backed storage for mapping plans.
//!
//! A plan file is a JSON array of mappings. Saving a proposal and reloading
//! it on a later run keeps column mappings consistent across imports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use gsync_model::Mapping;

/// Load a mapping plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<Vec<Mapping>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping plan from {}", path.display()))?;
    let mappings: Vec<Mapping> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse mapping plan from {}", path.display()))?;
    Ok(mappings)
}

/// Save a mapping plan as pretty-printed JSON.
pub fn save_plan(path: &Path, mappings: &[Mapping]) -> Result<()> {
    let json = serde_json::to_string_pretty(mappings)
        .context("Failed to serialize mapping plan")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write mapping plan to {}", path.display()))?;
    Ok(())
}
