use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use navsync_cli::replay::{ReplayReport, describe_payload};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Two-column key/value table.
pub fn print_fields(fields: &[(&str, String)]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (name, value) in fields {
        table.add_row(vec![header_cell(name), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_replay(report: &ReplayReport) {
    let mut steps = Table::new();
    steps.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("State"),
        header_cell("URL"),
    ]);
    apply_table_style(&mut steps);
    align_column(&mut steps, 0, CellAlignment::Right);
    for (number, record) in report.steps.iter().enumerate() {
        let url = if record.redirected {
            Cell::new(format!("{} (redirected)", record.url)).fg(Color::Yellow)
        } else {
            Cell::new(&record.url)
        };
        steps.add_row(vec![
            dim_cell(number),
            Cell::new(&record.step),
            Cell::new(record.state),
            url,
        ]);
    }
    println!("{steps}");

    let mut stack = Table::new();
    stack.set_header(vec![
        header_cell("Entry"),
        header_cell("URL"),
        header_cell("State"),
    ]);
    apply_table_style(&mut stack);
    align_column(&mut stack, 0, CellAlignment::Right);
    for (position, entry) in report.entries.iter().enumerate() {
        let payload = describe_payload(entry.payload.as_ref());
        if position == report.index {
            stack.add_row(vec![
                Cell::new(format!("> {position}"))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                Cell::new(&entry.url).add_attribute(Attribute::Bold),
                Cell::new(payload).add_attribute(Attribute::Bold),
            ]);
        } else {
            stack.add_row(vec![
                dim_cell(position),
                Cell::new(&entry.url),
                Cell::new(payload),
            ]);
        }
    }
    println!("{stack}");

    let stats = report.stats;
    println!(
        "pushState: {}  replaceState: {}  redirects: {}  errors: {}",
        stats.pushes, stats.replaces, stats.redirects, stats.errors
    );
    if report.detached {
        println!("History transport detached after an error.");
    }
    for message in &report.notifications {
        eprintln!("notification: {message}");
    }
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
