//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use super::colors::Theme;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled table with a bold header row.
pub fn result_table(theme: Theme, columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = base_table();

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if theme.is_colored() {
                Cell::new(col).add_attribute(Attribute::Bold).fg(Color::Cyan)
            } else {
                Cell::new(col)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(
            row.iter()
                .map(|v| Cell::new(v).set_alignment(CellAlignment::Right)),
        );
    }

    table
}

/// Creates a key-value info table (two columns: key and value).
pub fn info_table(theme: Theme, entries: &[(&str, String)]) -> Table {
    let mut table = base_table();

    for (key, value) in entries {
        let key_cell = if theme.is_colored() {
            Cell::new(key).fg(Color::DarkGrey)
        } else {
            Cell::new(key)
        };
        table.add_row(vec![key_cell, Cell::new(value)]);
    }

    table
}
