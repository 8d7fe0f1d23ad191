//! Command implementations: file I/O around the in-memory pipeline.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use gsync_advisory::Unavailable;
use gsync_map::{load_plan, save_plan};

use crate::cli::{InspectArgs, MergeArgs};
use crate::pipeline::{MergeOptions, build_inspect_report, build_merge_report};
use crate::types::{InspectReport, MergeReport};

pub fn run_merge(args: &MergeArgs) -> Result<MergeReport> {
    let source_text = fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read source export: {}", args.source.display()))?;
    let target_text = fs::read_to_string(&args.target)
        .with_context(|| format!("Failed to read target export: {}", args.target.display()))?;

    let plan = args.plan.as_deref().map(load_plan).transpose()?;
    let options = MergeOptions {
        plan,
        advisory: args.advisory,
    };

    // No advisory client is bundled; the stand-in degrades to the
    // placeholder message when --advisory is requested.
    let report = build_merge_report(
        &source_text,
        &target_text,
        &args.source.display().to_string(),
        &args.target.display().to_string(),
        options,
        &Unavailable,
    )?;

    if let Some(path) = &args.save_plan {
        save_plan(path, &report.mappings)?;
        info!(path = %path.display(), "saved mapping plan");
    }

    if args.dry_run {
        info!("dry run, not writing import file");
    } else {
        fs::write(&args.output, &report.csv)
            .with_context(|| format!("Failed to write import file: {}", args.output.display()))?;
        println!("Wrote {}", args.output.display());
    }
    Ok(report)
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectReport> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read export: {}", args.file.display()))?;
    Ok(build_inspect_report(&text, &args.file.display().to_string()))
}
