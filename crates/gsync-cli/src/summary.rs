use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gsync_cli::types::{InspectReport, MergeReport};

/// Number of leading columns and data rows shown in the preview table.
const PREVIEW_COLUMNS: usize = 4;
const PREVIEW_ROWS: usize = 5;

pub fn print_summary(report: &MergeReport) {
    println!("Source: {}", report.source_name);
    println!("Target: {}", report.target_name);
    println!(
        "Matched: {} / {} students ({} unmatched)",
        report.matched_count,
        report.total(),
        report.unmatched_count()
    );

    let new_mappings = report.new_mappings();
    if !new_mappings.is_empty() {
        println!("New assignment columns:");
        for mapping in &new_mappings {
            println!(
                "- {} ({} pts)",
                mapping.target_column,
                mapping.points.as_deref().unwrap_or("?")
            );
        }
    }

    if let Some(stats) = &report.stats {
        print_stats_table(report, stats);
    }
    if let Some(narrative) = &report.narrative {
        println!();
        println!("Advisory: {narrative}");
    }
    print_preview_table(report);
}

fn print_stats_table(report: &MergeReport, stats: &gsync_model::GradeStats) {
    println!();
    println!(
        "Statistics for \"{}\" (matched students only):",
        report.mappings[0].target_column
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Average"),
        header_cell("Median"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(format!("{:.2}", stats.average)),
        Cell::new(stats.median),
        Cell::new(stats.min),
        Cell::new(stats.max),
    ]);
    println!("{table}");

    let mut bands = Table::new();
    bands.set_header(vec![header_cell("Range"), header_cell("Count")]);
    apply_table_style(&mut bands);
    align_column(&mut bands, 1, CellAlignment::Right);
    for band in &stats.distribution {
        bands.add_row(vec![
            Cell::new(&band.range),
            if band.count > 0 {
                Cell::new(band.count)
            } else {
                dim_cell(band.count)
            },
        ]);
    }
    println!("{bands}");
}

fn print_preview_table(report: &MergeReport) {
    println!();
    println!("Preview (first {PREVIEW_ROWS} rows):");
    let leading: Vec<&String> = report.final_headers.iter().take(PREVIEW_COLUMNS).collect();
    let new_mappings = report.new_mappings();
    let trailing: Vec<&String> = new_mappings
        .iter()
        .map(|m| &m.target_column)
        .filter(|column| !leading.contains(column))
        .collect();

    let mut table = Table::new();
    let mut header = vec![header_cell("Status")];
    header.extend(leading.iter().map(|h| header_cell(h)));
    header.extend(trailing.iter().map(|h| {
        Cell::new(format!("+ {h}"))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }));
    table.set_header(header);
    apply_table_style(&mut table);

    for record in report.merged.iter().take(PREVIEW_ROWS) {
        let mut row = vec![status_cell(record.matched)];
        for column in leading.iter().chain(trailing.iter()) {
            row.push(Cell::new(gsync_model::Table::value(
                &record.merged,
                column,
            )));
        }
        table.add_row(row);
    }
    println!("{table}");
    if report.total() > PREVIEW_ROWS {
        println!("... {} more rows", report.total() - PREVIEW_ROWS);
    }
}

pub fn print_inspect(report: &InspectReport) {
    println!("File: {}", report.file_name);
    if report.headers.is_empty() {
        println!("(no data)");
        return;
    }
    println!("Rows: {}", report.row_count);
    println!(
        "Points row: {}",
        if report.has_points_row {
            "detected"
        } else {
            "none"
        }
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for header in &report.headers {
        let is_assignment = report.assignment_columns.contains(header);
        table.add_row(vec![
            Cell::new(header),
            if is_assignment {
                Cell::new("assignment").fg(Color::Green)
            } else {
                dim_cell("identity")
            },
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(matched: bool) -> Cell {
    if matched {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("!").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
