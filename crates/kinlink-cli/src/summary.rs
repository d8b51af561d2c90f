use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use kinlink_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("In"),
        header_cell("Kept"),
        header_cell("Dropped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    table.add_row(vec![
        stage_cell("read"),
        dim_cell("-"),
        Cell::new(result.records_read),
        dim_cell("-"),
    ]);
    for count in &result.validation.stages {
        table.add_row(vec![
            stage_cell(count.stage.name()),
            Cell::new(count.input),
            Cell::new(count.kept),
            count_cell(count.dropped(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        stage_cell("link"),
        Cell::new(result.people),
        Cell::new(result.related),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("WRITTEN")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.write.lines_written).add_attribute(Attribute::Bold),
        count_cell(result.write.failures, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.validation.malformed > 0 {
        println!(
            "Skipped {} records with too few fields",
            result.validation.malformed
        );
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn stage_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
