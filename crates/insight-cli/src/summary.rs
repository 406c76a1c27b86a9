use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use insight_model::{ColumnProfile, ColumnType, ProfileReport};
use insight_profile::round_percent;

/// Values listed per categorical column.
const TOP_VALUE_LIMIT: usize = 3;

pub fn print_summary(report: &ProfileReport, source: &str) {
    print!("{}", render_summary(report, source));
}

/// Overview, per-column table, and recommendations as terminal text.
pub fn render_summary(report: &ProfileReport, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source: {source}");
    let _ = writeln!(out, "{}", overview_table(report));
    if report.total_columns() > 0 {
        let _ = writeln!(out, "{}", column_table(report));
    }
    render_recommendations(report, &mut out);
    out
}

fn overview_table(report: &ProfileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Records"), Cell::new(report.total_records)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(report.total_columns())]);
    table.add_row(vec![
        Cell::new("Missing cells"),
        Cell::new(report.total_missing()),
    ]);
    table.add_row(vec![
        Cell::new("Data quality").add_attribute(Attribute::Bold),
        quality_cell(report.data_quality),
    ]);
    table.add_row(vec![Cell::new("Column types"), type_mix_cell(report)]);
    table
}

fn column_table(report: &ProfileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Distinct"),
        header_cell("Top values"),
    ]);
    apply_column_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for column in &report.columns {
        let missing_percent = round_percent(column.missing_count, report.total_records);
        table.add_row(vec![
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            type_cell(column.column_type),
            count_cell(column.missing_count),
            dim_cell(format!("{missing_percent}%")),
            distinct_cell(column),
            top_values_cell(column),
        ]);
    }
    table
}

fn render_recommendations(report: &ProfileReport, out: &mut String) {
    if report.recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations.");
        return;
    }
    for (title, items) in report.recommendations.sections() {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{title}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_column_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::LowerBoundary(Width::Fixed(13)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(11)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Percentage(40)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn quality_cell(score: u8) -> Cell {
    let color = match score {
        90.. => Color::Green,
        70..=89 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(format!("{score}%"))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn type_mix_cell(report: &ProfileReport) -> Cell {
    let parts: Vec<String> = [
        ColumnType::Numeric,
        ColumnType::Categorical,
        ColumnType::Datetime,
        ColumnType::Empty,
    ]
    .into_iter()
    .filter_map(|column_type| {
        let count = report.columns_of_type(column_type).count();
        (count > 0).then(|| format!("{count} {column_type}"))
    })
    .collect();
    if parts.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(parts.join(", "))
    }
}

fn type_cell(column_type: ColumnType) -> Cell {
    let color = match column_type {
        ColumnType::Numeric => Color::Blue,
        ColumnType::Categorical => Color::Magenta,
        ColumnType::Datetime => Color::Green,
        ColumnType::Empty => Color::DarkGrey,
    };
    Cell::new(column_type).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn distinct_cell(column: &ColumnProfile) -> Cell {
    match column.value_frequency {
        Some(_) => Cell::new(column.distinct_count()),
        None => dim_cell("-"),
    }
}

fn top_values_cell(column: &ColumnProfile) -> Cell {
    let top = column.top_values(TOP_VALUE_LIMIT);
    if top.is_empty() {
        return dim_cell("-");
    }
    let mut text = top
        .iter()
        .map(|(value, count)| format!("{value} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    if column.distinct_count() > top.len() {
        text.push_str(", ...");
    }
    Cell::new(text)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
