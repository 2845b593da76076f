//! Table extraction: `<table>` subtree → rows of cell text → pipe table.
//!
//! Only the direct structure is read: row groups (`thead`, `tbody`, `tfoot`)
//! one level down, rows, and their direct `td`/`th` cells. Nested tables end
//! up flattened into the text of the cell that contains them.

use marten_dom::{DomTree, NodeId};

/// One table row: cell texts in column order.
pub type TableRow = Vec<String>;

/// Collect the non-empty rows of `table` in document order.
#[must_use]
pub fn extract_rows(tree: &DomTree, table: NodeId) -> Vec<TableRow> {
    let mut rows = Vec::new();
    for (child, element) in tree.element_children(table) {
        if element.is("thead") || element.is("tbody") || element.is("tfoot") {
            for (row, row_element) in tree.element_children(child) {
                if row_element.is("tr") {
                    push_row(&mut rows, extract_cells(tree, row));
                }
            }
        } else if element.is("tr") {
            push_row(&mut rows, extract_cells(tree, child));
        }
    }
    rows
}

fn push_row(rows: &mut Vec<TableRow>, row: TableRow) {
    if !row.is_empty() {
        rows.push(row);
    }
}

/// Trimmed text of each direct `td`/`th` child of a `tr`.
#[must_use]
pub fn extract_cells(tree: &DomTree, row: NodeId) -> TableRow {
    tree.element_children(row)
        .filter(|(_, cell)| cell.is("td") || cell.is("th"))
        .map(|(cell, _)| tree.text_content(cell).trim().to_string())
        .collect()
}

/// Write `rows` as a Markdown pipe table.
///
/// The first row is the header. Every line has as many cells as the widest
/// row; short rows are padded with empty cells. Writes nothing for no rows.
pub fn write_pipe_table(out: &mut String, rows: &[TableRow]) {
    let Some((header, body)) = rows.split_first() else {
        return;
    };
    let columns = rows.iter().map(Vec::len).max().unwrap_or_default();

    write_row(out, header, columns);
    out.push('|');
    for _ in 0..columns {
        out.push_str(" --- |");
    }
    out.push('\n');
    for row in body {
        write_row(out, row, columns);
    }
}

fn write_row(out: &mut String, row: &[String], columns: usize) {
    out.push('|');
    for column in 0..columns {
        out.push(' ');
        out.push_str(row.get(column).map_or("", String::as_str));
        out.push_str(" |");
    }
    out.push('\n');
}
