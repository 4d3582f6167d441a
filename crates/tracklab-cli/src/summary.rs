use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tracklab_transform::ColumnClass;

use crate::cli::SummaryFormatArg;
use crate::types::{CleanResult, InspectResult, RangesResult};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Kept"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &result.files {
        table.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.raw_rows),
            Cell::new(file.raw_columns),
            Cell::new(file.clean_columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.columns).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_ranges_summary(result: &RangesResult) {
    if let Some(path) = &result.written {
        println!("Report: {}", path.display());
        return;
    }
    if !matches!(result.format, SummaryFormatArg::Table) {
        return;
    }
    let summary = &result.summary;
    if summary.is_empty() {
        println!("No samples fell inside the requested buckets.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&summary.source_column),
        header_cell(&summary.value_column),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &summary.rows {
        table.add_row(vec![Cell::new(&row.range), Cell::new(row.mean)]);
    }
    println!("{table}");
}

pub fn print_inspect_summary(result: &InspectResult) {
    for inspection in &result.files {
        println!("{} ({} rows)", inspection.path.display(), inspection.rows);
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Class"),
            header_cell("Populated"),
            header_cell("Missing"),
            header_cell("Cleaning"),
        ]);
        apply_summary_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        for column in &inspection.columns {
            if column.dropped {
                table.add_row(vec![
                    dim_cell(&column.name),
                    dim_cell(column.class.label()),
                    dim_cell(column.populated),
                    dim_cell(column.missing),
                    dim_cell("dropped"),
                ]);
            } else {
                table.add_row(vec![
                    Cell::new(&column.name),
                    class_cell(column.class),
                    Cell::new(column.populated),
                    Cell::new(column.missing),
                    Cell::new("kept"),
                ]);
            }
        }
        println!("{table}");
    }
}

fn class_cell(class: ColumnClass) -> Cell {
    match class {
        ColumnClass::Duration => Cell::new(class.label()).fg(Color::Magenta),
        ColumnClass::Numeric => Cell::new(class.label()).fg(Color::Green),
        ColumnClass::Text => Cell::new(class.label()).fg(Color::Blue),
    }
}

fn apply_summary_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
