//! Console rendering of tabular results.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as ComfyTable};
use core_types::Table;
use std::io::{self, Write};

pub use configuration::OutputFormat;

/// Width of every column in the fixed-width layout.
pub const COLUMN_WIDTH: usize = 25;

/// Writes `table` in the requested format.
pub fn render<W: Write>(format: OutputFormat, table: &Table, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Fixed => render_fixed(table, out),
        OutputFormat::Boxed => render_boxed(table, out),
    }
}

/// Fixed-width layout: every name and value left-justified in a
/// `COLUMN_WIDTH` field, a dashed separator under the header. Longer values
/// overflow their field untouched.
pub fn render_fixed<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    for column in table.columns() {
        write!(out, "{column:<width$}", width = COLUMN_WIDTH)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(table.columns().len() * COLUMN_WIDTH))?;

    for row in table.rows() {
        for value in row.values() {
            write!(out, "{value:<width$}", width = COLUMN_WIDTH)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_boxed<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    let mut boxed = ComfyTable::new();
    boxed
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(table.columns());
    for row in table.rows() {
        boxed.add_row(row.values().iter().map(ToString::to_string));
    }
    writeln!(out, "{boxed}")
}
