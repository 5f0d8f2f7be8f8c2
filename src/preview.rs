use std::fmt::Write;

use crate::extract::Row;
use crate::table::Table;

/// Renders both sorted groups as aligned text tables.
pub fn render(table: &Table) -> String {
    let header: Vec<String> = table.header().iter().map(|cell| cell.to_string()).collect();
    let mut out = String::new();

    for (name, rows) in table.groups() {
        let _ = writeln!(out, "{} (sorted by ACS)", name);
        out.push_str(&render_group(&header, rows));
        out.push('\n');
    }

    out
}

fn render_group(header: &[String], rows: &[Row]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells().iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|name| name.chars().count()).collect();
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    for line in &body {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
