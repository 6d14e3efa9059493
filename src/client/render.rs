//! Text table rendering

use serde_json::Value;

use crate::observability::Logger;

use super::normalize::extract_records;
use super::record::BowlerRecord;

const HEADERS: [&str; 7] = ["Name", "Team", "Address", "City", "State", "Zip", "Phone"];

/// Render a response body as the roster table.
///
/// An unrecognized body shape degrades to an error banner over an
/// empty table; it is never an error to the caller.
pub fn render_roster(body: &Value) -> String {
    match extract_records(body) {
        Ok(values) => {
            let records: Vec<BowlerRecord> =
                values.iter().map(BowlerRecord::from_value).collect();
            render_table(&records)
        }
        Err(e) => {
            Logger::warn("roster_shape_unrecognized", &[("cause", &e.to_string())]);
            format!("error: {}\n\n{}", e, render_table(&[]))
        }
    }
}

/// Render records as a fixed-width text table
pub fn render_table(records: &[BowlerRecord]) -> String {
    let rows: Vec<[&str; 7]> = records
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.team.as_str(),
                r.address.as_str(),
                r.city.as_str(),
                r.state.as_str(),
                r.zip.as_str(),
                r.phone.as_str(),
            ]
        })
        .collect();

    // Column widths: max of header and cell lengths
    let mut widths: [usize; 7] = HEADERS.map(|h| h.len());
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    push_separator(&mut out, &widths);

    if rows.is_empty() {
        out.push_str("No bowlers found.\n");
        return out;
    }

    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 7], widths: &[usize; 7]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.chars().count()..widths[i] {
            out.push(' ');
        }
    }
    // Trim trailing padding on the last column
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 7]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}
